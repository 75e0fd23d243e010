use crate::model::{HealthResponse, WelcomeResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use burrow_shortener::RegistryStats;
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "burrow";

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

pub async fn index_handler() -> Json<WelcomeResponse> {
    let endpoints = BTreeMap::from([
        ("shorten", "POST /shorten"),
        ("redirect", "GET /{code}"),
        ("info", "GET /info/{code}"),
        ("stats", "GET /stats"),
        ("health", "GET /health"),
    ]);

    Json(WelcomeResponse {
        message: "Welcome to Burrow URL shortener",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<RegistryStats> {
    Json(state.shortener().stats())
}
