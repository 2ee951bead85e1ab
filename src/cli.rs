//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_tui::ReplayStep;

/// Tic-tac-toe with move history, time travel and a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Apply a script of steps to a fresh session and print the result as JSON
    Replay {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Steps: 0-8 plays at that cell, jump:N, new, reset-scores
        #[arg(required = true)]
        steps: Vec<ReplayStep>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_replay_parses_steps() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--pretty", "4", "jump:0", "new"])
            .unwrap();
        match cli.command {
            Some(Command::Replay { pretty, steps }) => {
                assert!(pretty);
                assert_eq!(steps.len(), 3);
                assert_eq!(steps[2], ReplayStep::NewGame);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_replay_rejects_bad_step() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "10"]).is_err());
    }
}
