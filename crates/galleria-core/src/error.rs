use thiserror::Error;

/// Failures talking to the upstream gallery API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-2xx status.
    #[error("gallery API error: {status} - {status_text}")]
    Status { status: u16, status_text: String },
    /// The request was sent but no response came back.
    #[error("no response received from gallery API")]
    Unreachable,
    /// The request could not be composed locally.
    #[error("request error: {0}")]
    RequestSetup(String),
    /// The upstream answered 2xx with a body that is not JSON.
    #[error("gallery API returned an invalid body: {0}")]
    InvalidBody(String),
}
