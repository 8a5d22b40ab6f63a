use std::path::PathBuf;

use clap::Parser;

/// Headless frame driver for the hypyr scene graph.
#[derive(Parser, Debug)]
#[command(name = "hypyr", version, about)]
pub struct Args {
    /// TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of frames to run, overriding the config.
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Fixed time step in seconds, overriding the config.
    #[arg(long)]
    pub fixed_dt: Option<f64>,

    /// Log filter override (e.g. debug, hypyr=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
