use std::time::Duration;
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "https://gallery-content-query.cdn.vpsvc.com/api/v2";
pub const DEFAULT_CULTURE: &str = "en-us";

/// Configures an [`HttpGalleryClient`](crate::HttpGalleryClient).
#[derive(Debug, Clone, TypedBuilder)]
pub struct UpstreamSettings {
    /// Base URL of the gallery API; the galleries path is appended to it.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
    /// Culture segment of the content path.
    #[builder(default = DEFAULT_CULTURE.to_string(), setter(into))]
    pub culture: String,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    #[builder(default)]
    pub timeout: Option<Duration>,
}
