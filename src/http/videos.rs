use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::http::access::has_access_cookie;
use crate::http::state::AppState;

/// GET /api/videos — current scan snapshot plus the random-play flag.
/// Gated on cookie presence when the access code is enabled.
pub async fn list_videos(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if state.config.access.enable_code && !has_access_cookie(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "access code verification required" })),
        )
            .into_response();
    }

    // Shared read lock: blocks only for the duration of one snapshot swap by
    // the scanner, never for a walk in progress.
    let videos = state
        .library
        .read()
        .expect("video list lock poisoned")
        .videos
        .clone();

    Json(json!({
        "videos": videos,
        "random_play": state.config.video.random_play,
    }))
    .into_response()
}
