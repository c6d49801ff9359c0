//! Persistent username registry
//!
//! One JSON file (`users.json`) holding the set of registered usernames.
//! The whole set is loaded once and rewritten in full on every change.
//! Saves go through a temp file in the same directory followed by a
//! rename, so a crash mid-write cannot leave a truncated registry behind.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::user::Username;

/// Registry of all registered usernames
#[derive(Debug)]
pub struct UserRegistry {
    path: PathBuf,
    users: BTreeSet<Username>,
}

impl UserRegistry {
    /// Load the registry, starting empty if the file does not exist yet
    pub fn load(path: &Path) -> Result<Self> {
        let users: BTreeSet<Username> = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeSet::new()
        };
        debug!(path = %path.display(), count = users.len(), "loaded user registry");
        Ok(Self {
            path: path.to_path_buf(),
            users,
        })
    }

    /// Register a new username and persist the updated set.
    ///
    /// Fails with `AlreadyExists` if the name is taken. If the save fails
    /// the in-memory set is rolled back so it still mirrors the file.
    pub fn register(&mut self, user: &Username) -> Result<()> {
        if !self.users.insert(user.clone()) {
            return Err(Error::already_exists(format!("username '{}'", user)));
        }
        if let Err(e) = self.save() {
            self.users.remove(user);
            return Err(e);
        }
        Ok(())
    }

    pub fn contains(&self, user: &Username) -> bool {
        self.users.contains(user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Write the full set to disk, atomically replacing the old file
    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        // temp file must live in the same directory for the rename to stay
        // on one filesystem
        let mut temp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut temp, &self.users)?;
        temp.write_all(b"\n")?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(raw: &str) -> Username {
        Username::parse(raw).unwrap()
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let registry = UserRegistry::load(&temp.path().join("users.json")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_names_as_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        fs::write(&path, r#"["anna", "../evil"]"#).unwrap();

        let err = UserRegistry::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_register_persists_across_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let mut registry = UserRegistry::load(&path).unwrap();
        registry.register(&user("anna")).unwrap();
        registry.register(&user("bert")).unwrap();

        let reloaded = UserRegistry::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains(&user("anna")));
        assert!(reloaded.contains(&user("bert")));
        assert!(!reloaded.contains(&user("carla")));
    }

    #[test]
    fn test_register_duplicate_fails_and_keeps_set_intact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let mut registry = UserRegistry::load(&path).unwrap();
        registry.register(&user("anna")).unwrap();
        let err = registry.register(&user("anna")).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_file_is_a_json_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let mut registry = UserRegistry::load(&path).unwrap();
        registry.register(&user("bert")).unwrap();
        registry.register(&user("anna")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let names: Vec<String> = serde_json::from_str(&content).unwrap();
        // BTreeSet keeps the file sorted
        assert_eq!(names, vec!["anna", "bert"]);
    }

    #[test]
    fn test_no_leftover_temp_files_after_save() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let mut registry = UserRegistry::load(&path).unwrap();
        registry.register(&user("anna")).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["users.json"]);
    }
}
