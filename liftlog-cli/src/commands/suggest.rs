//! Suggest command - next training weight for an exercise

use anyhow::Result;
use colored::Colorize;

use liftlog_core::Trend;

use crate::output::format_weight;

use super::{get_context, resolve_user};

pub fn run(exercise: &str, json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let suggestion = ctx.progression_service.suggest(&user, exercise)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("{}", format!("Suggestion for '{}'", exercise).bold());
    println!("  Current weight: {}kg", suggestion.current_weight);
    println!("  Average reps:   {:.1}", suggestion.average_reps);

    let next = format!("  Next weight:    {}", format_weight(suggestion.next_weight));
    match suggestion.trend {
        Trend::Increase => {
            println!("{}", next.green());
            println!("  {}", "High rep average, add 5%".dimmed());
        }
        Trend::Hold => {
            println!("{}", next);
            println!("  {}", "Rep average on target, keep the weight".dimmed());
        }
        Trend::Decrease => {
            println!("{}", next.yellow());
            println!("  {}", "Low rep average, drop 5%".dimmed());
        }
    }
    Ok(())
}
