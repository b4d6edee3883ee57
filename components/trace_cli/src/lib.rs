//! Stack Trace CLI Library
//!
//! Provides the Runner struct and supporting modules for the `corten-trace`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::{ErrorSnapshot, Runner};
