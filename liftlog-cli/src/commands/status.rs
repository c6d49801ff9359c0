//! Status command - show a summary of the logged training data

use anyhow::Result;
use colored::Colorize;

use crate::output::create_table;

use super::{get_context, resolve_user};

pub fn run(json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let status = ctx.status_service.get_status(&user);

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", format!("Training Status for '{}'", status.username).bold());
    println!();

    // Summary table (vertical key-value pairs)
    let mut table = create_table();
    table.add_row(vec!["Exercises", &status.total_exercises.to_string()]);
    table.add_row(vec!["Records", &status.total_records.to_string()]);
    table.add_row(vec!["Sets", &status.total_sets.to_string()]);
    println!("{}", table);
    println!();

    if let Some(date) = status.last_workout {
        println!("Last workout: {}", date);
        println!();
    }

    if !status.exercises.is_empty() {
        let mut table = create_table();
        table.set_header(vec!["Exercise", "Records", "Sets", "Last"]);
        for exercise in &status.exercises {
            table.add_row(vec![
                exercise.name.clone(),
                exercise.records.to_string(),
                exercise.sets.to_string(),
                exercise
                    .last_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        println!("{}", table);
    }

    Ok(())
}
