pub mod access;
pub mod state;
pub mod videos;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // First scan root doubles as the mount root for raw video bytes.
    let video_root = state.config.video.scan_dirs[0].clone();
    Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/api/access-status", get(access::access_status))
        .route("/api/verify-access", post(access::verify_access))
        .route("/api/videos", get(videos::list_videos))
        .nest_service("/videos", ServeDir::new(video_root))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
