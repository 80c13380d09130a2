use crate::error::UpstreamError;
use async_trait::async_trait;
use serde_json::Value;

/// Number of items requested when the caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// A validated content query for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub product_id: String,
    pub requestor: String,
    pub limit: u32,
}

impl ContentQuery {
    pub fn new(product_id: impl Into<String>, requestor: impl Into<String>, limit: u32) -> Self {
        Self {
            product_id: product_id.into(),
            requestor: requestor.into(),
            limit,
        }
    }
}

/// A client for the upstream gallery content API.
///
/// Implementations make a single attempt per call; retries are left to the
/// caller.
#[async_trait]
pub trait GalleryClient: Send + Sync + 'static {
    /// Fetches the raw content document for `query`.
    async fn fetch_content(&self, query: &ContentQuery) -> Result<Value, UpstreamError>;
}
