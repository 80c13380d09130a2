mod content;
mod health;
mod image;

pub use content::content_handler;
pub use health::health_handler;
pub use image::{image_handler, missing_image_hash_handler};
