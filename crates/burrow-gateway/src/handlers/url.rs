use crate::error::Result;
use crate::model::ShortenRequest;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_shortener::UrlInfo;
use tracing::info;

pub async fn shorten_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = request?;
    let shortened = state.shortener().shorten(&request.url)?;

    info!(code = %shortened.short_code, url = %shortened.original_url, "short url issued");
    Ok((StatusCode::CREATED, Json(shortened)).into_response())
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let original = state.shortener().resolve(&code)?;
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, original)]).into_response())
}

pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfo>> {
    Ok(Json(state.shortener().info(&code)?))
}
