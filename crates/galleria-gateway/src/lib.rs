//! HTTP gateway for the Galleria content proxy.
//!
//! Exposes `GET /api/v1/content` (normalized gallery content) and
//! `GET /api/v1/img/{hash}` (short link redirects) on top of
//! [`galleria_core::ContentService`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
