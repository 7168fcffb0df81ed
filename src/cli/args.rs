//! CLI argument definitions using clap
//!
//! Commands:
//! - edition-catalog serve [--host <HOST>] [--port <PORT>] [--db <PATH>]
//! - edition-catalog seed [--db <PATH>]
//!
//! Running without a subcommand serves with the defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Edition catalog - a file-backed REST catalog of publication editions
#[derive(Parser, Debug)]
#[command(name = "edition-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log line format (text or json)
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 4000)]
        port: u16,

        /// Path of the JSON document holding the editions
        #[arg(long, default_value = "db.json")]
        db: PathBuf,
    },

    /// Write the sample editions if the document does not exist yet
    Seed {
        /// Path of the JSON document holding the editions
        #[arg(long, default_value = "db.json")]
        db: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
