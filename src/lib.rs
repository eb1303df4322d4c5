//! Minimal local video server — scan directories for video files and serve them over HTTP.

pub mod cli;
pub mod config;
pub mod http;
pub mod media;
