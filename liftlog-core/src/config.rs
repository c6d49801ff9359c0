//! Configuration management for liftlog
//!
//! Settings live in `settings.json` inside the data directory:
//!
//! ```json
//! {
//!   "currentUser": "anna"
//! }
//! ```
//!
//! A missing, unreadable or unparseable settings file falls back to
//! defaults rather than failing startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::user::Username;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    current_user: Option<Username>,
}

/// liftlog configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The logged-in user, if any
    pub current_user: Option<Username>,
}

impl Config {
    /// Load config from the data directory.
    ///
    /// Never fails: a missing, unreadable or malformed settings file all
    /// yield the defaults.
    pub fn load(data_dir: &Path) -> Self {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = match std::fs::read_to_string(&settings_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => SettingsFile::default(),
        };

        Self {
            current_user: raw.current_user,
        }
    }

    /// Save config to the data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");
        let settings = SettingsFile {
            current_user: self.current_user.clone(),
        };
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
