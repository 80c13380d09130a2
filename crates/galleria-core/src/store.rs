pub mod memory;

use crate::hash::ImageHash;

pub use memory::InMemoryHashStore;

/// Maps short image identifiers back to the upstream URLs they replace.
///
/// The store is append-only: there is no removal operation.
pub trait HashStore: Send + Sync + 'static {
    /// Returns the identifier for `url`, storing the mapping on first sight.
    ///
    /// An already-stored url returns its existing identifier unchanged.
    /// An empty url returns `None` and stores nothing.
    fn shorten(&self, url: &str) -> Option<ImageHash>;

    /// Looks up the original URL for an identifier.
    /// Returns `None` if the identifier is unknown.
    fn resolve(&self, hash: &str) -> Option<String>;

    /// Number of identifiers currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
