//! Core library entry for the `redate` CLI.
//!
//! `redate` walks a photo archive, infers each file's capture date from its
//! path, and rewrites the embedded metadata date and the file modification
//! time wherever they disagree with it. The decision logic lives in
//! [`reconcile`]; everything that touches the outside world goes through the
//! [`ports`] traits.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dates;
pub mod error;
pub mod ports;
pub mod reconcile;
pub mod scan;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
