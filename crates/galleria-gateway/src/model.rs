use serde::{Deserialize, Serialize};

/// Raw query parameters of the content endpoint, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct ContentParams {
    #[serde(rename = "productID")]
    pub product_id: Option<String>,
    pub requestor: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub short_links: usize,
}
