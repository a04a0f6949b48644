//! Command-line argument definitions using clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "glyphcraft.toml";

/// Glyphcraft - generate icon utilities and theme tokens as CSS
#[derive(Parser, Debug)]
#[command(name = "glyphcraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file. Built-in defaults are used when the default file is absent.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level selected by `--verbose` and `--quiet`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the stylesheet
    Build {
        /// Output file; the stylesheet is written to stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List cataloged icons and their class names
    Icons,

    /// Print every composed theme palette
    Themes,

    /// Run the full build without writing anything
    Check,
}
