use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Path under which short links are served by the gateway.
pub const IMAGE_ROUTE_PREFIX: &str = "/api/v1/img";

const HASH_LENGTH: usize = 8;

/// An opaque short identifier for an upstream image URL.
///
/// Identifiers are content-addressed: the first 8 hex characters of the MD5
/// digest of the URL. Two distinct URLs may collide; this is not detected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHash(String);

impl ImageHash {
    /// Computes the identifier for `url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use galleria_core::ImageHash;
    ///
    /// let hash = ImageHash::digest("https://x/y.png");
    /// assert_eq!(hash.as_str().len(), 8);
    /// assert_eq!(hash, ImageHash::digest("https://x/y.png"));
    /// ```
    pub fn digest(url: &str) -> Self {
        let digest = Md5::digest(url.as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(HASH_LENGTH);
        Self(encoded)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the short link served by this service under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}{}/{}",
            base_url.trim_end_matches('/'),
            IMAGE_ROUTE_PREFIX,
            self.0
        )
    }
}

impl Display for ImageHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_truncated_md5_hex() {
        // md5("hello") = 5d41402abc4b2a76b9719d911017c592
        assert_eq!(ImageHash::digest("hello").as_str(), "5d41402a");
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let hash = ImageHash::digest("https://example.com/preview.png");
        assert!(hash
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn distinct_urls_produce_distinct_hashes() {
        let first = ImageHash::digest("https://example.com/a.png");
        let second = ImageHash::digest("https://example.com/b.png");
        assert_ne!(first, second);
    }

    #[test]
    fn to_url_joins_route_prefix() {
        let hash = ImageHash::digest("hello");
        assert_eq!(
            hash.to_url("http://localhost:3000"),
            "http://localhost:3000/api/v1/img/5d41402a"
        );
        assert_eq!(
            hash.to_url("http://localhost:3000/"),
            "http://localhost:3000/api/v1/img/5d41402a"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let hash = ImageHash::digest("hello");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"5d41402a\"");
    }
}
