use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use vidbox::config::{AccessConfig, Config, ServerConfig, VideoConfig};
use vidbox::media::library::{VideoLibrary, SharedLibrary};
use vidbox::media::scanner::rescan;

#[test]
fn rescan_replaces_the_whole_list() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("first.mp4"), b"").unwrap();

    let config = Config {
        server: ServerConfig {
            ip: "127.0.0.1".parse().unwrap(),
            port: 8080,
        },
        video: VideoConfig {
            scan_dirs: vec![root.path().to_owned()],
            supported_formats: vec![".mp4".to_string()],
            random_play: false,
        },
        access: AccessConfig::default(),
    };

    let library = VideoLibrary::shared();
    rescan(&library, &config);
    assert_eq!(library.read().unwrap().videos, vec!["first.mp4"]);

    // Stale entries vanish on the next cycle; the list is replaced, not merged.
    fs::remove_file(root.path().join("first.mp4")).unwrap();
    fs::write(root.path().join("second.mp4"), b"").unwrap();
    rescan(&library, &config);
    assert_eq!(library.read().unwrap().videos, vec!["second.mp4"]);
}

#[test]
fn rescan_of_vanished_root_empties_the_list() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("only.mp4"), b"").unwrap();
    let root_path: PathBuf = root.path().to_owned();

    let config = Config {
        server: ServerConfig {
            ip: "127.0.0.1".parse().unwrap(),
            port: 8080,
        },
        video: VideoConfig {
            scan_dirs: vec![root_path],
            supported_formats: vec![".mp4".to_string()],
            random_play: false,
        },
        access: AccessConfig::default(),
    };

    let library = VideoLibrary::shared();
    rescan(&library, &config);
    assert_eq!(library.read().unwrap().videos.len(), 1);

    drop(root);
    rescan(&library, &config);
    assert!(library.read().unwrap().videos.is_empty());
}

/// Readers racing a writer that swaps between two complete lists must only
/// ever observe one of the complete lists, never a mix.
#[test]
fn concurrent_readers_never_see_a_partial_snapshot() {
    const LIST_LEN: usize = 200;
    const SWAPS: usize = 500;

    let library: SharedLibrary = VideoLibrary::shared();
    library.write().unwrap().videos = vec!["old.mp4".to_string(); LIST_LEN];

    let writer = {
        let library = Arc::clone(&library);
        thread::spawn(move || {
            for i in 0..SWAPS {
                let name = if i % 2 == 0 { "new.mp4" } else { "old.mp4" };
                let candidate = vec![name.to_string(); LIST_LEN];
                *library.write().unwrap() = VideoLibrary { videos: candidate };
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let library = Arc::clone(&library);
            thread::spawn(move || {
                for _ in 0..SWAPS {
                    let guard = library.read().unwrap();
                    assert_eq!(guard.videos.len(), LIST_LEN);
                    let first = guard.videos[0].clone();
                    assert!(
                        guard.videos.iter().all(|v| *v == first),
                        "observed a mixed snapshot"
                    );
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
