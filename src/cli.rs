use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vidbox",
    about = "Minimal local video server — point it at a config file and it serves your videos",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Path to YAML config file (overrides default search: ./config/config.yaml, ~/.config/vidbox/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTTP port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (overrides the config file)
    #[arg(short, long)]
    pub bind: Option<IpAddr>,
}
