use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;

use vidbox::media::library::VideoLibrary;
use vidbox::{cli, config, http, media};

/// Set to true once the first Ctrl+C is received. Second Ctrl+C force-exits.
static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);

/// Wait for the first Ctrl+C (graceful shutdown).
/// On second Ctrl+C (during shutdown wait), force-exits immediately.
async fn wait_for_shutdown() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    if SHUTTING_DOWN.swap(true, Ordering::SeqCst) {
        eprintln!("\nvidbox: forced exit");
        std::process::exit(1);
    }
    // first Ctrl+C: proceed with graceful shutdown
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    // Config is required; a missing or malformed file is fatal before serving.
    let Some(path) = config::find_config_file(args.config.as_deref()) else {
        eprintln!("error: no config file found (looked for ./config/config.yaml and ~/.config/vidbox/config.yaml)");
        std::process::exit(1);
    };
    let config = match config::load_config(&path) {
        Ok(cfg) => cfg.resolve(&args),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded config from {}", path.display());
    let config = Arc::new(config);

    tracing::info!("Scanning video directories:");
    for dir in &config.video.scan_dirs {
        tracing::info!("  {}", dir.display());
    }

    // Synchronous first scan — blocks the thread; acceptable since the server
    // has not started yet, and means /api/videos is meaningful immediately.
    let library = VideoLibrary::shared();
    media::scanner::rescan(&library, &config);

    // Background rescan loop for the lifetime of the process.
    tokio::spawn(media::scanner::run(
        Arc::clone(&library),
        Arc::clone(&config),
    ));

    let state = http::state::AppState {
        library: Arc::clone(&library),
        config: Arc::clone(&config),
    };
    let app = http::build_router(state);

    let addr = config.bind_addr();
    tracing::info!(
        "Serving {} videos on http://{}",
        library.read().expect("video list lock poisoned").videos.len(),
        addr
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: server error: {}", e);
            std::process::exit(1);
        });

    tracing::info!("Goodbye.");
}
