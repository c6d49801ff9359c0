//! Status service - per-user training summaries

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::user::Username;
use crate::store::FileStore;

/// Status service for training data summaries
pub struct StatusService {
    store: Arc<FileStore>,
}

impl StatusService {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Summarize a user's training data.
    ///
    /// Built entirely from read operations, so a user with no data gets an
    /// all-zero summary rather than an error.
    pub fn get_status(&self, user: &Username) -> StatusSummary {
        let names = self.store.list_exercises(user);
        let mut exercises = Vec::with_capacity(names.len());
        let mut total_records = 0;
        let mut total_sets = 0;
        let mut last_workout: Option<NaiveDate> = None;

        for name in names {
            let records = self.store.get_records(user, &name);
            let sets = records.iter().map(|r| r.sets.len()).sum::<usize>();
            let last_date = records.iter().map(|r| r.date).max();

            total_records += records.len();
            total_sets += sets;
            if let Some(date) = last_date {
                last_workout = Some(last_workout.map_or(date, |d| d.max(date)));
            }
            exercises.push(ExerciseSummary {
                name,
                records: records.len(),
                sets,
                last_date,
            });
        }

        StatusSummary {
            username: user.to_string(),
            total_exercises: exercises.len(),
            total_records,
            total_sets,
            last_workout,
            exercises,
        }
    }
}

/// Overall training summary for one user
#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub username: String,
    pub total_exercises: usize,
    pub total_records: usize,
    pub total_sets: usize,
    pub last_workout: Option<NaiveDate>,
    pub exercises: Vec<ExerciseSummary>,
}

/// Per-exercise slice of the summary
#[derive(Debug, Serialize)]
pub struct ExerciseSummary {
    pub name: String,
    pub records: usize,
    pub sets: usize,
    pub last_date: Option<NaiveDate>,
}
