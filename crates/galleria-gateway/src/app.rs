use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{content_handler, health_handler, image_handler, missing_image_hash_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api/v1",
                Router::new()
                    .route("/content", get(content_handler))
                    .route("/img", get(missing_image_hash_handler))
                    .route("/img/", get(missing_image_hash_handler))
                    .route("/img/{hash}", get(image_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
