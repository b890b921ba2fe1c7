//! Command-line argument definitions for the Menagerie CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path and format,
//! configuration file selection, the recorded timestamp, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Menagerie class diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output path, overwritten if it exists [default: ClassDiagram.<format>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (xml, json); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Timestamp recorded on the document (RFC 3339); defaults to now
    #[arg(long)]
    pub generated_at: Option<String>,

    /// Log a greeting and the configured diet of each sample animal
    #[arg(long)]
    pub roll_call: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
