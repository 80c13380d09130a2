//! Core types and traits for the Galleria content proxy.
//!
//! This crate owns the short-link hash store, the normalized content model,
//! the upstream gallery client trait, and the [`ContentService`] that ties
//! them together. The HTTP implementation of the upstream client lives in
//! `galleria-upstream`, the HTTP surface in `galleria-gateway`.

pub mod error;
pub mod gallery;
pub mod hash;
pub mod model;
pub mod normalize;
pub mod service;
pub mod store;

pub use error::UpstreamError;
pub use gallery::{ContentQuery, GalleryClient, DEFAULT_LIMIT};
pub use hash::{ImageHash, IMAGE_ROUTE_PREFIX};
pub use model::{ContentItem, ContentResponse};
pub use normalize::normalize;
pub use service::ContentService;
pub use store::{HashStore, InMemoryHashStore};
