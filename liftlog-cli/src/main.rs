//! liftlog CLI - Workout tracking in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{exercise, history, log, login, register, status, suggest};

/// liftlog - workout tracking in your terminal
#[derive(Parser)]
#[command(name = "ll", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Username (prompted for if not specified)
        username: Option<String>,
    },

    /// Log in as a registered user
    Login {
        /// Username (prompted for if not specified)
        username: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Manage exercises
    Exercise {
        #[command(subcommand)]
        command: exercise::ExerciseCommands,
    },

    /// Log a workout record for an exercise
    Log {
        /// Exercise name (chosen interactively if not specified)
        exercise: Option<String>,
        /// Sets as REPSxWEIGHT pairs, e.g. 8x60 8x60 6x62
        #[arg(value_name = "SET")]
        sets: Vec<String>,
        /// Workout date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },

    /// Show the recorded history of an exercise
    History {
        /// Exercise name
        exercise: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },

    /// Suggest the next training weight for an exercise
    Suggest {
        /// Exercise name
        exercise: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },

    /// Show a summary of the logged training data
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr and stay quiet unless RUST_LOG says otherwise
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { username } => register::run(username),
        Commands::Login { username } => login::run(username),
        Commands::Logout => login::run_logout(),
        Commands::Exercise { command } => exercise::run(command),
        Commands::Log { exercise, sets, date, json, user } => {
            log::run(exercise, sets, date, json, user)
        }
        Commands::History { exercise, json, user } => history::run(&exercise, json, user),
        Commands::Suggest { exercise, json, user } => suggest::run(&exercise, json, user),
        Commands::Status { json, user } => status::run(json, user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_command_parses_sets() {
        let cli = Cli::parse_from(["ll", "log", "bench", "8x60", "6x62", "--date", "2024-01-15"]);
        match cli.command {
            Commands::Log { exercise, sets, date, .. } => {
                assert_eq!(exercise.as_deref(), Some("bench"));
                assert_eq!(sets, vec!["8x60", "6x62"]);
                assert_eq!(date.as_deref(), Some("2024-01-15"));
            }
            _ => panic!("expected the log command"),
        }
    }
}
