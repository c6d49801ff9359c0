//! Workout service - exercise creation and record logging

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::record::{Record, WorkoutSet};
use crate::domain::result::{Error, Result};
use crate::domain::user::Username;
use crate::store::FileStore;

/// Workout service for managing exercises and their records
pub struct WorkoutService {
    store: Arc<FileStore>,
}

impl WorkoutService {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Create a new, empty exercise log
    pub fn create_exercise(&self, user: &Username, name: &str) -> Result<()> {
        self.store.create_exercise(user, name)
    }

    /// All exercises that have a log file, sorted
    pub fn list_exercises(&self, user: &Username) -> Vec<String> {
        self.store.list_exercises(user)
    }

    /// Append one workout record.
    ///
    /// The date defaults to today. At least one set is required here even
    /// though the store itself would accept an empty record.
    pub fn log_workout(
        &self,
        user: &Username,
        exercise: &str,
        date: Option<NaiveDate>,
        sets: Vec<WorkoutSet>,
    ) -> Result<Record> {
        if sets.is_empty() {
            return Err(Error::validation("a workout needs at least one set"));
        }
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let record = Record::new(date, sets);
        self.store.add_record(user, exercise, &record)?;
        Ok(record)
    }

    /// Full history of an exercise, in append order
    pub fn history(&self, user: &Username, exercise: &str) -> Vec<Record> {
        self.store.get_records(user, exercise)
    }
}
