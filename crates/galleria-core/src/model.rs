use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single normalized gallery content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub design_id: Option<String>,
    pub design_concept_id: Option<String>,
    pub design_concept_name: Option<String>,
    pub studio_url: Option<String>,
    /// A short link served by this service, or the upstream URL when no
    /// base URL was available.
    pub preview_url: String,
    pub product_options: Map<String, Value>,
}

/// The envelope returned by the content endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ContentItem>,
}

impl ContentResponse {
    pub fn new(data: Vec<ContentItem>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_nulls_and_camel_case() {
        let item = ContentItem {
            design_id: Some("d1".to_string()),
            design_concept_id: None,
            design_concept_name: None,
            studio_url: None,
            preview_url: "https://x/y.png".to_string(),
            product_options: Map::new(),
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "designId": "d1",
                "designConceptId": null,
                "designConceptName": null,
                "studioUrl": null,
                "previewUrl": "https://x/y.png",
                "productOptions": {}
            })
        );
    }

    #[test]
    fn response_count_tracks_data() {
        let response = ContentResponse::new(vec![]);
        assert!(response.success);
        assert_eq!(response.count, 0);
    }
}
