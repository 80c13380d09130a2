use crate::settings::UpstreamSettings;
use async_trait::async_trait;
use galleria_core::{ContentQuery, GalleryClient, UpstreamError};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

/// [`GalleryClient`] backed by `reqwest`.
///
/// Issues `GET {base_url}/Galleries/{productID}/Culture/{culture}/Content`
/// with `requestor` and `limit` query parameters. One attempt per call.
#[derive(Debug, Clone)]
pub struct HttpGalleryClient {
    http: Client,
    base_url: String,
    culture: String,
}

impl HttpGalleryClient {
    pub fn new(settings: UpstreamSettings) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| UpstreamError::RequestSetup(e.to_string()))?;

        Ok(Self::with_client(http, settings))
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    /// The timeout in `settings` is ignored; the client's own applies.
    pub fn with_client(http: Client, settings: UpstreamSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url,
            culture: settings.culture,
        }
    }

    fn content_url(&self, query: &ContentQuery) -> Result<Url, UpstreamError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| UpstreamError::RequestSetup(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| {
                UpstreamError::RequestSetup(format!("base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend([
                "Galleries",
                query.product_id.as_str(),
                "Culture",
                self.culture.as_str(),
                "Content",
            ]);

        url.query_pairs_mut()
            .append_pair("requestor", &query.requestor)
            .append_pair("limit", &query.limit.to_string());

        Ok(url)
    }
}

#[async_trait]
impl GalleryClient for HttpGalleryClient {
    async fn fetch_content(&self, query: &ContentQuery) -> Result<Value, UpstreamError> {
        let url = self.content_url(query)?;
        debug!(url = %url, "requesting gallery content");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), product_id = %query.product_id, "gallery API rejected request");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                UpstreamError::InvalidBody(e.to_string())
            } else {
                UpstreamError::Unreachable
            }
        })
    }
}

/// Maps a failed send to the upstream error taxonomy.
fn classify_send_error(error: reqwest::Error) -> UpstreamError {
    if error.is_builder() {
        return UpstreamError::RequestSetup(error.to_string());
    }
    debug!(error = %error, "no response from gallery API");
    UpstreamError::Unreachable
}
