//! Workout record domain model and line format
//!
//! One record is one logged session for one exercise: a date plus the
//! (reps, weight) sets performed that day. On disk a record is a single
//! comma-separated line with no quoting or escaping:
//!
//! ```text
//! 2024-01-15,8,60,8,60,6,62
//! ```
//!
//! The date comes first, then alternating reps/weight values. A line is
//! valid only if it has an odd field count of at least three (date plus
//! one full pair), the date is ISO `YYYY-MM-DD` and every numeric field
//! parses as an unsigned integer. Readers skip anything else whole; a
//! trailing reps value with no weight makes the entire line invalid.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used in log lines
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One (repetitions, weight) pair within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub reps: u32,
    /// Weight in kilograms
    pub weight: u32,
}

impl WorkoutSet {
    pub fn new(reps: u32, weight: u32) -> Self {
        Self { reps, weight }
    }
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}kg", self.reps, self.weight)
    }
}

/// One logged workout session for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub sets: Vec<WorkoutSet>,
}

impl Record {
    pub fn new(date: NaiveDate, sets: Vec<WorkoutSet>) -> Self {
        Self { date, sets }
    }

    /// Encode as one log line, without the trailing newline.
    ///
    /// A record with no sets encodes as just the date; readers will skip
    /// such a line.
    pub fn to_line(&self) -> String {
        let mut line = self.date.format(DATE_FORMAT).to_string();
        for set in &self.sets {
            line.push_str(&format!(",{},{}", set.reps, set.weight));
        }
        line
    }

    /// Parse one log line, `None` if the line is malformed
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        // date plus at least one full pair; an even count means a
        // dangling reps value
        if fields.len() < 3 || fields.len() % 2 == 0 {
            return None;
        }
        let date = NaiveDate::parse_from_str(fields[0], DATE_FORMAT).ok()?;
        let mut sets = Vec::with_capacity((fields.len() - 1) / 2);
        for pair in fields[1..].chunks(2) {
            let reps = pair[0].parse::<u32>().ok()?;
            let weight = pair[1].parse::<u32>().ok()?;
            sets.push(WorkoutSet { reps, weight });
        }
        Some(Self { date, sets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode_single_set() {
        let record = Record::new(date(2024, 1, 15), vec![WorkoutSet::new(8, 60)]);
        assert_eq!(record.to_line(), "2024-01-15,8,60");
    }

    #[test]
    fn test_encode_multiple_sets() {
        let record = Record::new(
            date(2024, 1, 15),
            vec![
                WorkoutSet::new(8, 60),
                WorkoutSet::new(8, 60),
                WorkoutSet::new(6, 62),
            ],
        );
        assert_eq!(record.to_line(), "2024-01-15,8,60,8,60,6,62");
    }

    #[test]
    fn test_encode_empty_record_is_just_the_date() {
        let record = Record::new(date(2024, 1, 15), vec![]);
        assert_eq!(record.to_line(), "2024-01-15");
    }

    #[test]
    fn test_parse_round_trip() {
        let original = Record::new(
            date(2023, 12, 31),
            vec![WorkoutSet::new(12, 40), WorkoutSet::new(10, 45)],
        );
        let parsed = Record::parse_line(&original.to_line()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_single_pair() {
        let record = Record::parse_line("2024-03-01,5,100").unwrap();
        assert_eq!(record.date, date(2024, 3, 1));
        assert_eq!(record.sets, vec![WorkoutSet::new(5, 100)]);
    }

    #[test]
    fn test_parse_rejects_too_few_fields() {
        assert!(Record::parse_line("").is_none());
        assert!(Record::parse_line("2024-01-15").is_none());
        assert!(Record::parse_line("2024-01-15,8").is_none());
    }

    #[test]
    fn test_parse_rejects_dangling_reps() {
        // even field count: 8,60 then a reps value with no weight
        assert!(Record::parse_line("2024-01-15,8,60,6").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(Record::parse_line("2024-01-15,eight,60").is_none());
        assert!(Record::parse_line("2024-01-15,8,sixty").is_none());
        assert!(Record::parse_line("2024-01-15,-8,60").is_none());
        assert!(Record::parse_line("2024-01-15,8.5,60").is_none());
        assert!(Record::parse_line("2024-01-15,8, 60").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Record::parse_line("15.01.2024,8,60").is_none());
        assert!(Record::parse_line("not-a-date,8,60").is_none());
        assert!(Record::parse_line("2024-13-40,8,60").is_none());
    }

    #[test]
    fn test_set_display() {
        assert_eq!(WorkoutSet::new(8, 60).to_string(), "8x60kg");
    }
}
