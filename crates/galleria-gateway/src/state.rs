use galleria_core::ContentService;

#[derive(Clone)]
pub struct AppState {
    content: ContentService,
    public_base_url: Option<String>,
}

impl AppState {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            public_base_url: None,
        }
    }

    /// Uses a fixed base URL for short links instead of deriving it from
    /// each request's `Host` header.
    pub fn with_public_base_url(mut self, public_base_url: impl Into<String>) -> Self {
        let base_url: String = public_base_url.into();
        self.public_base_url = Some(base_url.trim_end_matches('/').to_owned());
        self
    }

    pub fn content(&self) -> &ContentService {
        &self.content
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }
}
