//! Flat-file record store
//!
//! All training data lives in plain text files, one directory per user:
//!
//! ```text
//! <data_dir>/users/<username>/<exercise>.txt   one record per line
//! <data_dir>/users/<username>/exercises.txt    newline-separated name index
//! ```
//!
//! The directory scan is the source of truth for which exercises exist;
//! `exercises.txt` is a best-effort secondary index kept for tools that
//! want creation order. Read operations never fail: an absent or
//! unreadable file yields an empty result, and callers cannot tell the
//! two apart. Write operations report errors.

pub mod registry;

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::record::Record;
use crate::domain::result::{Error, Result};
use crate::domain::user::{validate_name_component, Username};

/// File extension shared by exercise logs and the name index
const LOG_EXT: &str = "txt";

/// File stem reserved for the exercise name index
const INDEX_STEM: &str = "exercises";

/// Flat-file store for exercise logs
pub struct FileStore {
    users_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            users_dir: data_dir.join("users"),
        }
    }

    /// Directory holding one user's logs
    pub fn user_dir(&self, user: &Username) -> PathBuf {
        self.users_dir.join(user.as_str())
    }

    /// Create the user's directory if it does not exist yet
    pub fn ensure_user_dir(&self, user: &Username) -> Result<()> {
        fs::create_dir_all(self.user_dir(user))?;
        Ok(())
    }

    /// Create an empty log file for a new exercise.
    ///
    /// The user's directory is created if needed. Fails with
    /// `AlreadyExists` if the log is already there; the existing file is
    /// left untouched either way.
    pub fn create_exercise(&self, user: &Username, exercise: &str) -> Result<()> {
        let name = valid_exercise_name(exercise)?;
        fs::create_dir_all(self.user_dir(user))?;
        let path = self.log_path(user, name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::already_exists(format!("exercise '{}'", name)));
            }
            Err(e) => return Err(e.into()),
        }
        // the index is advisory; a failed update is not a failed create
        if let Err(e) = self.add_to_index(user, name) {
            warn!(user = %user, exercise = name, "could not update exercise index: {}", e);
        }
        debug!(user = %user, exercise = name, "created exercise log");
        Ok(())
    }

    /// Names of all exercises that have a log file, sorted.
    ///
    /// An absent or unreadable user directory yields an empty list. The
    /// name index is not an exercise and is excluded.
    pub fn list_exercises(&self, user: &Username) -> Vec<String> {
        let entries = match fs::read_dir(self.user_dir(user)) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().map(|e| e == LOG_EXT).unwrap_or(false) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if stem != INDEX_STEM {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        names
    }

    /// Append one record to an exercise log.
    ///
    /// The log file is created implicitly if missing; the user's directory
    /// is not. On error nothing has been appended.
    pub fn add_record(&self, user: &Username, exercise: &str, record: &Record) -> Result<()> {
        let name = valid_exercise_name(exercise)?;
        let path = self.log_path(user, name);
        let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
        writeln!(file, "{}", record.to_line())?;
        debug!(
            user = %user,
            exercise = name,
            sets = record.sets.len(),
            "appended record"
        );
        Ok(())
    }

    /// All records of an exercise, in file (append) order.
    ///
    /// Malformed lines are skipped with a warning. An absent or unreadable
    /// log yields an empty vector; a read error mid-file keeps the records
    /// read so far.
    pub fn get_records(&self, user: &Username, exercise: &str) -> Vec<Record> {
        let name = match valid_exercise_name(exercise) {
            Ok(name) => name,
            Err(_) => return Vec::new(),
        };
        let path = self.log_path(user, name);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => return Vec::new(),
        };
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(exercise = name, "stopped reading log early: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match Record::parse_line(&line) {
                Some(record) => records.push(record),
                None => warn!(exercise = name, line = %line, "skipping malformed record line"),
            }
        }
        records
    }

    /// Exercise names from the secondary index, in first-appearance order.
    ///
    /// Blank lines and duplicates are dropped; surrounding whitespace is
    /// trimmed. A missing index yields an empty list.
    pub fn exercise_index(&self, user: &Username) -> Vec<String> {
        let content = match fs::read_to_string(self.index_path(user)) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        let mut names: Vec<String> = Vec::new();
        for line in content.lines() {
            let name = line.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    fn add_to_index(&self, user: &Username, exercise: &str) -> Result<()> {
        let mut names = self.exercise_index(user);
        if names.iter().any(|n| n == exercise) {
            return Ok(());
        }
        names.push(exercise.to_string());
        let mut content = names.join("\n");
        content.push('\n');
        fs::write(self.index_path(user), content)?;
        Ok(())
    }

    fn log_path(&self, user: &Username, exercise: &str) -> PathBuf {
        self.user_dir(user)
            .join(format!("{}.{}", exercise, LOG_EXT))
    }

    fn index_path(&self, user: &Username) -> PathBuf {
        self.user_dir(user)
            .join(format!("{}.{}", INDEX_STEM, LOG_EXT))
    }
}

/// Trim and validate an exercise name.
///
/// Exercise names become file stems, so they follow the same rules as
/// usernames; `exercises` is reserved for the name index.
fn valid_exercise_name(exercise: &str) -> Result<&str> {
    let name = exercise.trim();
    if let Err(msg) = validate_name_component(name) {
        return Err(Error::validation(format!("exercise name {}", msg)));
    }
    if name == INDEX_STEM {
        return Err(Error::validation(format!(
            "'{}' is reserved for the exercise index",
            INDEX_STEM
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_name_trimming() {
        assert_eq!(valid_exercise_name("  bench press  ").unwrap(), "bench press");
    }

    #[test]
    fn test_exercise_name_rejects_reserved_index_name() {
        assert!(valid_exercise_name("exercises").is_err());
        // only the exact stem is reserved
        assert!(valid_exercise_name("exercises2").is_ok());
    }

    #[test]
    fn test_exercise_name_rejects_path_characters() {
        assert!(valid_exercise_name("../../etc/passwd").is_err());
        assert!(valid_exercise_name("a/b").is_err());
        assert!(valid_exercise_name("").is_err());
        assert!(valid_exercise_name("   ").is_err());
    }
}
