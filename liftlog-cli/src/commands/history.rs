//! History command - show the records of an exercise

use anyhow::Result;
use colored::Colorize;

use crate::output::create_table;

use super::{get_context, resolve_user};

pub fn run(exercise: &str, json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let records = ctx.workout_service.history(&user, exercise);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", format!("No records for '{}'", exercise).dimmed());
        return Ok(());
    }

    println!("{}", format!("History for '{}'", exercise).bold());
    println!();

    let mut table = create_table();
    table.set_header(vec!["Date", "Sets", "Volume"]);
    for record in &records {
        let sets: Vec<String> = record.sets.iter().map(|s| s.to_string()).collect();
        let volume: u64 = record
            .sets
            .iter()
            .map(|s| u64::from(s.reps) * u64::from(s.weight))
            .sum();
        table.add_row(vec![
            record.date.to_string(),
            sets.join("  "),
            format!("{}kg", volume),
        ]);
    }
    println!("{}", table);
    println!();
    println!("{} record(s)", records.len());
    Ok(())
}
