//! Progression service - next-weight suggestions
//!
//! The heuristic averages the repetition counts of every set across an
//! exercise's whole history. A high average (strictly above 8) earns a 5%
//! weight increase, a low average (strictly below 5) a 5% reduction, and
//! anything in between keeps the weight unchanged. The current working
//! weight is the weight of the first set of the most recent record.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::record::Record;
use crate::domain::result::{Error, Result};
use crate::domain::user::Username;
use crate::store::FileStore;

/// Strict upper bound of the rep average that keeps the weight unchanged
const REPS_HIGH: f64 = 8.0;
/// Strict lower bound of the rep average that keeps the weight unchanged
const REPS_LOW: f64 = 5.0;
/// Multiplier applied above `REPS_HIGH`
const INCREASE_FACTOR: f64 = 1.05;
/// Multiplier applied below `REPS_LOW`
const DECREASE_FACTOR: f64 = 0.95;

/// Direction of the suggested weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Hold,
    Decrease,
}

/// Next-weight suggestion together with the inputs that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub exercise: String,
    /// Weight of the first set of the most recent record, in kg
    pub current_weight: u32,
    /// Mean repetition count across every set of every record
    pub average_reps: f64,
    /// Suggested next weight in kg, rounded to one decimal place
    pub next_weight: f64,
    pub trend: Trend,
}

/// Progression service for training weight suggestions
pub struct ProgressionService {
    store: Arc<FileStore>,
}

impl ProgressionService {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Suggest the next training weight for an exercise
    pub fn suggest(&self, user: &Username, exercise: &str) -> Result<Suggestion> {
        let records = self.store.get_records(user, exercise);
        next_weight(exercise, &records)
    }
}

/// Calculate a next-weight suggestion from loaded records.
///
/// Preconditions, checked in this order: at least one record exists, the
/// most recent record has a first set (its weight is the current working
/// weight), and at least one set exists anywhere in the history.
pub fn next_weight(exercise: &str, records: &[Record]) -> Result<Suggestion> {
    let last = records
        .last()
        .ok_or_else(|| Error::NoRecords(exercise.to_string()))?;
    let current_weight = last
        .sets
        .first()
        .map(|s| s.weight)
        .ok_or_else(|| Error::MissingWeight(exercise.to_string()))?;

    let mut count = 0u32;
    let mut total = 0u64;
    for record in records {
        for set in &record.sets {
            count += 1;
            total += u64::from(set.reps);
        }
    }
    if count == 0 {
        return Err(Error::NoReps(exercise.to_string()));
    }
    let average_reps = total as f64 / f64::from(count);

    let (factor, trend) = if average_reps > REPS_HIGH {
        (INCREASE_FACTOR, Trend::Increase)
    } else if average_reps < REPS_LOW {
        (DECREASE_FACTOR, Trend::Decrease)
    } else {
        (1.0, Trend::Hold)
    };

    Ok(Suggestion {
        exercise: exercise.to_string(),
        current_weight,
        average_reps,
        next_weight: round_tenths(f64::from(current_weight) * factor),
        trend,
    })
}

/// Round to one decimal place, halves away from zero
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
