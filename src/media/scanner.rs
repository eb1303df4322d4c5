use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::config::Config;
use crate::media::library::{SharedLibrary, VideoLibrary};

/// How often the background task re-walks the scan roots.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Walk all scan roots and return every regular file whose extension exactly
/// matches one of `formats` (case-sensitive, leading dot included), as a path
/// relative to the root it was found under.
/// Missing/unreadable roots and entries log warn and continue — one bad root
/// never aborts the whole scan.
pub fn scan(roots: &[PathBuf], formats: &[String]) -> Vec<String> {
    let start = Instant::now();
    let mut videos = Vec::new();

    for root in roots {
        if !root.exists() {
            tracing::warn!("Scan root does not exist, skipping: {}", root.display());
            continue;
        }
        for entry in WalkDir::new(root).follow_links(true) {
            match entry {
                Err(e) => {
                    tracing::warn!("Cannot access entry under {}: {}", root.display(), e);
                }
                Ok(entry) if entry.file_type().is_file() => {
                    let Some(name) = entry.file_name().to_str() else {
                        continue;
                    };
                    let Some(ext) = file_ext(name) else {
                        continue;
                    };
                    if !formats.iter().any(|f| f == ext) {
                        continue;
                    }
                    match entry.path().strip_prefix(root) {
                        Ok(rel) => {
                            let rel = rel.to_string_lossy().into_owned();
                            tracing::debug!("found {} under {}", rel, root.display());
                            videos.push(rel);
                        }
                        Err(e) => {
                            // strip_prefix cannot fail for entries walked from root,
                            // but a symlinked WalkDir entry keeps the link path, so
                            // this stays a warn instead of an unwrap.
                            tracing::warn!(
                                "Cannot relativize {}: {}",
                                entry.path().display(),
                                e
                            );
                        }
                    }
                }
                Ok(_) => {} // directory entries — walkdir handles recursion
            }
        }
    }

    tracing::info!(
        "Scanned {} video files in {:.1}s",
        videos.len(),
        start.elapsed().as_secs_f64()
    );
    videos
}

/// Extension of a file name including the leading dot ("video.mp4" -> ".mp4").
/// None when the name contains no dot at all.
fn file_ext(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i..])
}

/// Scan once and atomically replace the shared list. The write lock is held
/// only for the `Vec` swap, never during the filesystem walk.
pub fn rescan(library: &SharedLibrary, config: &Config) {
    let videos = scan(&config.video.scan_dirs, &config.video.supported_formats);
    let mut guard = library.write().expect("video list lock poisoned");
    *guard = VideoLibrary { videos };
}

/// Periodic scan loop — runs for the lifetime of the process. The startup
/// scan has already happened synchronously in main, so the interval's
/// immediate first tick is consumed before the loop.
pub async fn run(library: SharedLibrary, config: Arc<Config>) {
    let mut ticker = tokio::time::interval(SCAN_INTERVAL);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        rescan(&library, &config);
    }
}
