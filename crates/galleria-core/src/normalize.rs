use crate::model::ContentItem;
use crate::store::HashStore;
use serde_json::{Map, Value};

/// Reshapes a raw upstream gallery response into [`ContentItem`]s.
///
/// Items are read from `results.content`; anything else yields an empty vec.
/// Each `previewUrls.size1x` is registered with `store` and, when `base_url`
/// is non-empty, replaced by the short link under that base. Item order and
/// count are preserved exactly.
pub fn normalize<S>(raw: &Value, base_url: &str, store: &S) -> Vec<ContentItem>
where
    S: HashStore + ?Sized,
{
    let Some(items) = raw
        .get("results")
        .and_then(|results| results.get("content"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| normalize_item(item, base_url, store))
        .collect()
}

fn normalize_item<S>(item: &Value, base_url: &str, store: &S) -> ContentItem
where
    S: HashStore + ?Sized,
{
    let original_url = item
        .get("previewUrls")
        .and_then(|urls| urls.get("size1x"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    let hash = store.shorten(original_url);
    let preview_url = match hash {
        Some(hash) if !base_url.is_empty() => hash.to_url(base_url),
        _ => original_url.to_owned(),
    };

    ContentItem {
        design_id: text_field(item, "designId"),
        design_concept_id: text_field(item, "designConceptId"),
        design_concept_name: text_field(item, "designConceptName"),
        studio_url: text_field(item, "studioUrl"),
        preview_url,
        product_options: item
            .get("productOptions")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(Map::new),
    }
}

/// Missing, null and empty values collapse to `None`; numbers keep their
/// decimal form.
fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
