//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// No records logged yet for the named exercise
    #[error("No records for '{0}' yet")]
    NoRecords(String),

    /// The most recent record for the named exercise has no weight entry
    #[error("The last record for '{0}' has no weight")]
    MissingWeight(String),

    /// No repetition values anywhere in the history of the named exercise
    #[error("No repetitions recorded for '{0}'")]
    NoReps(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::already_exists("exercise 'bench press'");
        assert_eq!(err.to_string(), "Already exists: exercise 'bench press'");

        let err = Error::not_found("username 'anna'");
        assert_eq!(err.to_string(), "Not found: username 'anna'");

        let err = Error::validation("bad input");
        assert!(err.to_string().contains("Validation error"));
    }

    #[test]
    fn test_progression_error_messages() {
        assert_eq!(
            Error::NoRecords("squat".to_string()).to_string(),
            "No records for 'squat' yet"
        );
        assert_eq!(
            Error::MissingWeight("squat".to_string()).to_string(),
            "The last record for 'squat' has no weight"
        );
        assert_eq!(
            Error::NoReps("squat".to_string()).to_string(),
            "No repetitions recorded for 'squat'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
