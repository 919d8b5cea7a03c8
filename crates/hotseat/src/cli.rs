//! Command-line interface for hotseat.

use clap::Parser;
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two players, one terminal, one 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hotseat"]);
        assert_eq!(cli.config, PathBuf::from("hotseat.toml"));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["hotseat", "-c", "game.toml", "--log-file", "/tmp/h.log"]);
        assert_eq!(cli.config, PathBuf::from("game.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/h.log")));
    }
}
