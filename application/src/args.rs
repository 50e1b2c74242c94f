//! [`Args`] definitions.

use std::path::PathBuf;

use clap::Parser;

/// Batch pricing of car rentals and their modifications.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the input JSON file, overriding the configured one.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to the output JSON file, overriding the configured one.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
