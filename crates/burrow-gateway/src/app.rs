use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, index_handler, info_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/stats", get(stats_handler))
            .route("/shorten", post(shorten_handler))
            .route("/info/{code}", get(info_handler))
            // Matched last: static routes above take priority.
            .route("/{code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}
