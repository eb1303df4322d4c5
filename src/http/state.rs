use std::sync::Arc;

use crate::config::Config;
use crate::media::library::SharedLibrary;

/// Shared application state injected into all route handlers via axum::extract::State.
/// The library is written by the scanner task and read here; the config is
/// loaded once at startup and immutable after.
#[derive(Clone)]
pub struct AppState {
    pub library: SharedLibrary,
    pub config: Arc<Config>,
}
