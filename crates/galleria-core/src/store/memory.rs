use crate::hash::ImageHash;
use crate::store::HashStore;
use dashmap::DashMap;
use tracing::trace;

/// In-memory implementation of [`HashStore`] using DashMap.
///
/// Entries live for the lifetime of the process and are never evicted.
/// Identifiers are content-addressed, so a url seen twice maps to the entry
/// already stored for it.
#[derive(Debug, Default)]
pub struct InMemoryHashStore {
    urls: DashMap<String, String>,
}

impl InMemoryHashStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: DashMap::with_capacity(capacity),
        }
    }
}

impl HashStore for InMemoryHashStore {
    fn shorten(&self, url: &str) -> Option<ImageHash> {
        if url.is_empty() {
            return None;
        }

        let hash = ImageHash::digest(url);
        if self
            .urls
            .get(hash.as_str())
            .is_some_and(|entry| entry.value() == url)
        {
            return Some(hash);
        }

        // A colliding url takes over the identifier from the previous one.
        self.urls.insert(hash.as_str().to_owned(), url.to_owned());
        trace!(hash = %hash, url, "stored short link");

        Some(hash)
    }

    fn resolve(&self, hash: &str) -> Option<String> {
        self.urls.get(hash).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[test]
    fn shorten_then_resolve() {
        let store = InMemoryHashStore::new();

        let hash = store.shorten("https://x/y.png").unwrap();

        assert_eq!(hash.as_str().len(), 8);
        assert_eq!(store.resolve(hash.as_str()).as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn shorten_is_idempotent() {
        let store = InMemoryHashStore::new();

        let first = store.shorten("https://example.com/a.png").unwrap();
        let second = store.shorten("https://example.com/a.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn distinct_urls_get_distinct_hashes() {
        let store = InMemoryHashStore::new();

        let first = store.shorten("https://example.com/a.png").unwrap();
        let second = store.shorten("https://example.com/b.png").unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.resolve(second.as_str()).as_deref(),
            Some("https://example.com/b.png")
        );
    }

    #[test]
    fn empty_url_is_not_stored() {
        let store = InMemoryHashStore::new();

        assert!(store.shorten("").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn resolve_unknown_hash() {
        let store = InMemoryHashStore::new();

        assert!(store.resolve("deadbeef").is_none());
    }

    #[test]
    fn hash_matches_content_digest() {
        let store = InMemoryHashStore::with_capacity(4);

        let hash = store.shorten("hello").unwrap();

        assert_eq!(hash, ImageHash::digest("hello"));
    }

    /// Finds two distinct urls whose identifiers are equal.
    fn colliding_urls() -> (String, String) {
        let mut seen: HashMap<ImageHash, String> = HashMap::new();
        for i in 0..1_000_000u32 {
            let url = format!("https://cdn.example.com/{}.png", i);
            let hash = ImageHash::digest(&url);
            if let Some(previous) = seen.insert(hash, url.clone()) {
                return (previous, url);
            }
        }
        panic!("no identifier collision among the first million urls");
    }

    #[test]
    fn reshortening_after_collision_points_back_at_url() {
        let store = InMemoryHashStore::new();
        let (first, second) = colliding_urls();

        let hash = store.shorten(&first).unwrap();
        assert_eq!(store.shorten(&second).unwrap(), hash);
        assert_eq!(store.resolve(hash.as_str()), Some(second.clone()));

        assert_eq!(store.shorten(&first).unwrap(), hash);
        assert_eq!(store.resolve(hash.as_str()), Some(first));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_shorten_of_same_url() {
        let store = Arc::new(InMemoryHashStore::new());
        let mut handles = vec![];

        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.shorten("https://example.com/shared.png").unwrap()
            }));
        }

        let mut hashes = vec![];
        for handle in handles {
            hashes.push(handle.await.unwrap());
        }

        assert!(hashes.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_shorten_of_distinct_urls() {
        let store = Arc::new(InMemoryHashStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.shorten(&format!("https://example{}.com/img.png", i))
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let url = format!("https://example{}.com/img.png", i);
            let hash = ImageHash::digest(&url);
            assert_eq!(store.resolve(hash.as_str()), Some(url));
        }
    }
}
