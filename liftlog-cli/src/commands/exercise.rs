//! Exercise command - manage exercise logs

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Input;

use crate::output;

use super::{get_context, resolve_user};

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// Create a new exercise log
    Add {
        /// Exercise name (prompted for if not specified)
        name: Option<String>,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },
    /// List all exercises
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Act as this user instead of the logged-in one
        #[arg(long, env = "LIFTLOG_USER")]
        user: Option<String>,
    },
}

pub fn run(command: ExerciseCommands) -> Result<()> {
    match command {
        ExerciseCommands::Add { name, user } => run_add(name, user),
        ExerciseCommands::List { json, user } => run_list(json, user),
    }
}

fn run_add(name: Option<String>, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Exercise name").interact_text()?,
    };
    let name = name.trim().to_string();

    ctx.workout_service.create_exercise(&user, &name)?;
    output::success(&format!("Created exercise '{}'", name));
    Ok(())
}

fn run_list(json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let exercises = ctx.workout_service.list_exercises(&user);

    if json {
        println!("{}", serde_json::to_string_pretty(&exercises)?);
        return Ok(());
    }

    if exercises.is_empty() {
        println!(
            "{}",
            "No exercises yet. Create one with 'll exercise add'".dimmed()
        );
        return Ok(());
    }

    println!("{}", format!("Exercises for '{}'", user).bold());
    for name in &exercises {
        println!("  {}", name);
    }
    Ok(())
}
