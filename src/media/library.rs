use std::sync::{Arc, RwLock};

/// Flat in-memory list of discovered video files, each path relative to its
/// scan root. Shared as `Arc<RwLock<VideoLibrary>>`: the scanner task is the
/// sole writer and replaces the whole list at once, so readers always see a
/// complete snapshot from a single scan pass.
#[derive(Debug, Default)]
pub struct VideoLibrary {
    pub videos: Vec<String>,
}

/// Handle shared between the scanner task and the HTTP handlers.
pub type SharedLibrary = Arc<RwLock<VideoLibrary>>;

impl VideoLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedLibrary {
        Arc::new(RwLock::new(Self::new()))
    }
}
