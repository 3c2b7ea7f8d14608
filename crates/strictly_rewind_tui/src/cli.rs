//! Command-line interface for strictly_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with a jumpable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe in the terminal with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "strictly_rewind.toml")]
    pub config: PathBuf,

    /// Start with the move list showing the latest move first
    #[arg(long)]
    pub descending: bool,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_rewind"]);
        assert_eq!(cli.config, PathBuf::from("strictly_rewind.toml"));
        assert!(!cli.descending);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "strictly_rewind",
            "--config",
            "custom.toml",
            "--descending",
            "--log-file",
            "game.log",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(cli.descending);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }
}
