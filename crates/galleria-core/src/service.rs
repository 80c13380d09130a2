use crate::error::UpstreamError;
use crate::gallery::{ContentQuery, GalleryClient};
use crate::model::ContentResponse;
use crate::normalize::normalize;
use crate::store::HashStore;
use std::sync::Arc;
use tracing::{debug, trace};

/// Fetches gallery content and resolves the short links it hands out.
///
/// The service owns handles to the upstream client and the hash store; both
/// are shared, so cloning the service is cheap.
#[derive(Clone)]
pub struct ContentService {
    client: Arc<dyn GalleryClient>,
    store: Arc<dyn HashStore>,
}

impl ContentService {
    pub fn new(client: Arc<dyn GalleryClient>, store: Arc<dyn HashStore>) -> Self {
        Self { client, store }
    }

    /// Fetches content for `query` and normalizes it.
    ///
    /// Preview URLs are rewritten to short links under `base_url`; pass an
    /// empty string to keep the upstream URLs. Any upstream failure aborts the
    /// whole request.
    pub async fn get_content(
        &self,
        query: &ContentQuery,
        base_url: &str,
    ) -> Result<ContentResponse, UpstreamError> {
        trace!(product_id = %query.product_id, limit = query.limit, "fetching gallery content");

        let raw = self.client.fetch_content(query).await?;
        let data = normalize(&raw, base_url, self.store.as_ref());

        debug!(product_id = %query.product_id, count = data.len(), "normalized gallery content");
        Ok(ContentResponse::new(data))
    }

    /// Resolves a short image identifier to its original URL.
    pub fn resolve_image(&self, hash: &str) -> Option<String> {
        let url = self.store.resolve(hash);
        if url.is_none() {
            trace!(hash, "image hash not found");
        }
        url
    }

    /// Number of short links handed out so far.
    pub fn short_link_count(&self) -> usize {
        self.store.len()
    }
}
