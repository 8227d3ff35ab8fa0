//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// folio - portfolio page tooling
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Check page controller configuration and replay interaction traces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a JSON trace of page events and print one snapshot per event
    Replay {
        /// Path to a JSON array of page events
        trace: PathBuf,

        /// Controller configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Raw value to pre-seed as the stored accent hue
        #[arg(long)]
        stored_hue: Option<String>,

        /// Simulate a runtime without visibility observation
        #[arg(long, default_value_t = false)]
        no_observer: bool,

        /// Scroll offset when the page is first rendered
        #[arg(long, default_value_t = 0.0)]
        initial_scroll: f64,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Load and validate a config file, printing the resolved values
    Check {
        /// Path to the TOML config
        path: PathBuf,
    },

    /// Print the default configuration
    Default,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay_arguments() {
        let cli = Cli::try_parse_from([
            "folio",
            "replay",
            "trace.json",
            "--stored-hue",
            "15",
            "--no-observer",
        ]);
        let Ok(Cli {
            command:
                Commands::Replay {
                    trace,
                    stored_hue,
                    no_observer,
                    ..
                },
        }) = cli
        else {
            panic!("replay should parse");
        };
        assert_eq!(trace, PathBuf::from("trace.json"));
        assert_eq!(stored_hue.as_deref(), Some("15"));
        assert!(no_observer);
    }
}
