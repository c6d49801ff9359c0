//! liftlog Core - Business logic for workout tracking
//!
//! This crate implements the core logic in three layers:
//!
//! - **domain**: Core entities (Record, WorkoutSet, Username) and errors
//! - **store**: Flat-file persistence for exercise logs and the username
//!   registry
//! - **services**: Business logic orchestration (accounts, workouts,
//!   progression, status)
//!
//! Everything lives under one data directory:
//!
//! ```text
//! <data_dir>/users.json                        username registry
//! <data_dir>/settings.json                     application settings
//! <data_dir>/users/<username>/<exercise>.txt   exercise record logs
//! <data_dir>/users/<username>/exercises.txt    secondary name index
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use config::Config;
use services::*;
use store::registry::UserRegistry;
use store::FileStore;

// Re-export commonly used types at crate root
pub use domain::record::{Record, WorkoutSet};
pub use domain::result::{Error, Result};
pub use domain::user::Username;
pub use services::{StatusSummary, Suggestion, Trend};

/// File name of the username registry inside the data directory
pub const REGISTRY_FILE: &str = "users.json";

/// Main context for liftlog operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the record store, and all services.
pub struct LiftlogContext {
    pub config: Config,
    pub store: Arc<FileStore>,
    pub account_service: AccountService,
    pub workout_service: WorkoutService,
    pub progression_service: ProgressionService,
    pub status_service: StatusService,
}

impl LiftlogContext {
    /// Create a new liftlog context rooted at the given data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir);

        let store = Arc::new(FileStore::new(data_dir));
        let registry = UserRegistry::load(&data_dir.join(REGISTRY_FILE))?;

        // Create services
        let account_service =
            AccountService::new(registry, Arc::clone(&store), data_dir.to_path_buf());
        let workout_service = WorkoutService::new(Arc::clone(&store));
        let progression_service = ProgressionService::new(Arc::clone(&store));
        let status_service = StatusService::new(Arc::clone(&store));

        Ok(Self {
            config,
            store,
            account_service,
            workout_service,
            progression_service,
            status_service,
        })
    }
}
