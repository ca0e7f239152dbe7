//! Command-line interface
//!
//! The three operational settings are required flags; everything else
//! comes from the config file or environment.

use clap::Parser;

/// HTTP service storing text notes as files in a cache directory.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Host address to bind
    #[arg(long)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long)]
    pub port: u16,

    /// Path to the note storage directory (created if missing)
    #[arg(short, long)]
    pub cache: String,

    /// Config file base name, without extension
    #[arg(long, default_value = "config")]
    pub config: String,
}
