//! Log command - record a workout

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};

use liftlog_core::{LiftlogContext, Username, WorkoutSet};

use crate::output;

use super::{get_context, resolve_user};

pub fn run(
    exercise: Option<String>,
    sets: Vec<String>,
    date: Option<String>,
    json: bool,
    user: Option<String>,
) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    let exercise = match exercise {
        Some(name) => name.trim().to_string(),
        None => pick_exercise(&ctx, &user)?,
    };

    // Parse date if provided
    let date_parsed = if let Some(d) = date {
        Some(NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD"))?)
    } else {
        None
    };

    let sets = if sets.is_empty() {
        prompt_sets()?
    } else {
        sets.iter()
            .map(|s| parse_set(s))
            .collect::<Result<Vec<_>>>()?
    };

    let record = ctx
        .workout_service
        .log_workout(&user, &exercise, date_parsed, sets)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let formatted: Vec<String> = record.sets.iter().map(|s| s.to_string()).collect();
    output::success(&format!("Logged {} for '{}'", record.date, exercise));
    println!("  {}", formatted.join("  "));
    Ok(())
}

/// Choose an exercise from the user's list
fn pick_exercise(ctx: &LiftlogContext, user: &Username) -> Result<String> {
    let exercises = ctx.workout_service.list_exercises(user);
    if exercises.is_empty() {
        anyhow::bail!("No exercises yet. Create one with 'll exercise add'");
    }
    let choice = Select::new()
        .with_prompt("Exercise")
        .items(&exercises)
        .default(0)
        .interact()?;
    Ok(exercises[choice].clone())
}

/// Parse one REPSxWEIGHT argument, e.g. `8x60`
fn parse_set(raw: &str) -> Result<WorkoutSet> {
    let (reps, weight) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow::anyhow!("Invalid set '{}': expected REPSxWEIGHT, e.g. 8x60", raw))?;
    let reps = reps
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid reps in set '{}'", raw))?;
    let weight = weight
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid weight in set '{}'", raw))?;
    Ok(WorkoutSet::new(reps, weight))
}

/// Collect sets interactively until an empty entry
fn prompt_sets() -> Result<Vec<WorkoutSet>> {
    println!("Enter sets as REPSxWEIGHT (e.g. 8x60), finish with an empty line");
    let mut sets = Vec::new();
    loop {
        let raw: String = Input::new()
            .with_prompt(format!("Set {}", sets.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if raw.trim().is_empty() {
            break;
        }
        match parse_set(&raw) {
            Ok(set) => sets.push(set),
            Err(e) => output::error(&e.to_string()),
        }
    }
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("8x60").unwrap(), WorkoutSet::new(8, 60));
        assert_eq!(parse_set("12X40").unwrap(), WorkoutSet::new(12, 40));
        assert_eq!(parse_set(" 8 x 60 ").unwrap(), WorkoutSet::new(8, 60));
    }

    #[test]
    fn test_parse_set_rejects_garbage() {
        assert!(parse_set("8").is_err());
        assert!(parse_set("x60").is_err());
        assert!(parse_set("8x").is_err());
        assert!(parse_set("eightxsixty").is_err());
        assert!(parse_set("8x60x70").is_err());
    }
}
