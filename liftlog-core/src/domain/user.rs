//! Username domain model
//!
//! Usernames are case-insensitive: input is trimmed and lowercased once at
//! the boundary, and the normalized form is used everywhere after that,
//! including as the user's directory name under `users/`. Deserialization
//! goes through the same parse, so names loaded from `users.json` or
//! `settings.json` are validated and normalized like typed input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A normalized (trimmed, lowercase) username
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Username(String);

impl Username {
    /// Normalize and validate a raw username
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim().to_lowercase();
        if let Err(msg) = validate_name_component(&name) {
            return Err(Error::validation(format!("username {}", msg)));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

/// Validate that a name is safe to use as a single path component.
///
/// Usernames and exercise names both become file or directory names, so
/// they must not be empty, must not start with a dot and must not contain
/// path separators or NUL.
pub fn validate_name_component(name: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        return Err("cannot be empty");
    }
    if name.starts_with('.') {
        return Err("cannot start with a dot");
    }
    if name.contains(['/', '\\', '\0']) {
        return Err("cannot contain path separators");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_normalization() {
        assert_eq!(Username::parse("Anna").unwrap().as_str(), "anna");
        assert_eq!(Username::parse("  BERT  ").unwrap().as_str(), "bert");
        assert_eq!(Username::parse("carla").unwrap().as_str(), "carla");
    }

    #[test]
    fn test_username_rejects_empty() {
        assert!(Username::parse("").is_err());
        assert!(Username::parse("   ").is_err());
    }

    #[test]
    fn test_username_rejects_path_characters() {
        assert!(Username::parse("a/b").is_err());
        assert!(Username::parse("a\\b").is_err());
        assert!(Username::parse("..").is_err());
        assert!(Username::parse(".hidden").is_err());
    }

    #[test]
    fn test_case_variants_normalize_to_same_name() {
        let a = Username::parse("Anna").unwrap();
        let b = Username::parse("anna").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deserialize_validates_and_normalizes() {
        let user: Username = serde_json::from_str("\" Anna \"").unwrap();
        assert_eq!(user.as_str(), "anna");

        assert!(serde_json::from_str::<Username>("\"../evil\"").is_err());
        assert!(serde_json::from_str::<Username>("\"a/b\"").is_err());
        assert!(serde_json::from_str::<Username>("\"\"").is_err());
    }

    #[test]
    fn test_name_component_validation() {
        assert!(validate_name_component("bench press").is_ok());
        assert!(validate_name_component("Kreuzheben").is_ok());
        assert!(validate_name_component("").is_err());
        assert!(validate_name_component("../escape").is_err());
        assert!(validate_name_component("a\0b").is_err());
    }
}
