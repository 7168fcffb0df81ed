//! CLI module for the edition catalog
//!
//! Provides command-line interface for:
//! - serve: run the REST API (default when no subcommand is given)
//! - seed: create the edition document with the sample set

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, seed, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
