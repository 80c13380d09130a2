//! HTTP client for the upstream gallery content API.
//!
//! [`HttpGalleryClient`] implements [`galleria_core::GalleryClient`] on top of
//! `reqwest`, classifying failures into [`galleria_core::UpstreamError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use galleria_core::{ContentQuery, GalleryClient};
//! use galleria_upstream::{HttpGalleryClient, UpstreamSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpGalleryClient::new(UpstreamSettings::builder().build())?;
//! let raw = client.fetch_content(&ContentQuery::new("PRD-123", "my-app", 10)).await?;
//! println!("{raw}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod settings;

pub use client::HttpGalleryClient;
pub use settings::{UpstreamSettings, DEFAULT_BASE_URL, DEFAULT_CULTURE};
