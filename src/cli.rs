//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// url-shortener - short links with custom paths, metadata and expiration
#[derive(Parser, Debug)]
#[command(name = "url-shortener")]
#[command(version)]
#[command(about = "A URL shortener service", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Generate a sample configuration file
    GenerateConfig {
        /// Output file path (default: config.example.toml)
        output: Option<String>,
    },
}
