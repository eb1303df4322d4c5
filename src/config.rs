use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// `[server]` section: where to bind.
#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

/// `[video]` section: what to scan for and how to present it.
#[derive(Deserialize, Debug, Clone)]
pub struct VideoConfig {
    /// Root directories searched for video files. The first entry is also the
    /// mount root for the `/videos/*` static route.
    pub scan_dirs: Vec<PathBuf>,
    /// Recognized extensions, each including the leading dot (".mp4").
    /// Matched by exact string equality against a file's extension.
    pub supported_formats: Vec<String>,
    #[serde(default)]
    pub random_play: bool,
}

/// `[access]` section: the shared-code gate in front of the video list.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AccessConfig {
    #[serde(default)]
    pub enable_code: bool,
    #[serde(default)]
    pub access_code: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub video: VideoConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

impl Config {
    /// Apply CLI overrides on top of the file config. CLI wins where given.
    pub fn resolve(mut self, args: &crate::cli::Args) -> Self {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(bind) = args.bind {
            self.server.ip = bind;
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.ip, self.server.port)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("config/config.yaml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("vidbox").join("config.yaml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("video.scan_dirs must not be empty")]
    NoScanDirs,
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&content)?;
    if config.video.scan_dirs.is_empty() {
        return Err(ConfigError::NoScanDirs);
    }
    Ok(config)
}
