//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `redate`.
#[derive(Debug, Parser)]
#[command(name = "redate", version, about = "Reconcile photo archive dates")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite embedded and file dates that disagree with the path date.
    Fix {
        /// Archive directory to scan recursively.
        #[arg(env = "REDATE_ROOT")]
        root: PathBuf,
        /// Additional file name suffix to skip (repeatable).
        #[arg(long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,
        /// Do not skip `.DS_Store`, `Thumbs.db` and `desktop.ini`.
        #[arg(long)]
        no_default_ignores: bool,
        /// Report corrections without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the candidate dates and planned corrections for files.
    Inspect {
        /// Files to inspect.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_fix_subcommand() {
        let cli = Cli::parse_from([
            "redate",
            "fix",
            "/photos",
            "--ignore",
            ".xmp",
            "--ignore",
            ".aae",
            "--dry-run",
        ]);
        match cli.command {
            Command::Fix { root, ignore, no_default_ignores, dry_run } => {
                assert_eq!(root, PathBuf::from("/photos"));
                assert_eq!(ignore, vec![".xmp", ".aae"]);
                assert!(!no_default_ignores);
                assert!(dry_run);
            }
            Command::Inspect { .. } => panic!("expected fix"),
        }
    }

    #[test]
    fn parses_inspect_subcommand() {
        let cli = Cli::parse_from(["redate", "inspect", "/a.jpg", "/b.jpg"]);
        assert!(matches!(cli.command, Command::Inspect { ref paths } if paths.len() == 2));
    }

    #[test]
    fn inspect_requires_a_path() {
        assert!(Cli::try_parse_from(["redate", "inspect"]).is_err());
    }
}
