//! Account service - registration, login and the saved session

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::user::Username;
use crate::store::registry::UserRegistry;
use crate::store::FileStore;

/// Account service for user registration and session handling
pub struct AccountService {
    registry: UserRegistry,
    store: Arc<FileStore>,
    data_dir: PathBuf,
}

impl AccountService {
    pub fn new(registry: UserRegistry, store: Arc<FileStore>, data_dir: PathBuf) -> Self {
        Self {
            registry,
            store,
            data_dir,
        }
    }

    /// Register a new user and create their data directory.
    ///
    /// Registration does not log the user in. The directory is created
    /// before the name is persisted, so a failed registration leaves no
    /// registry entry behind and can simply be retried.
    pub fn register(&mut self, raw: &str) -> Result<Username> {
        let user = Username::parse(raw)?;
        if self.registry.contains(&user) {
            return Err(Error::already_exists(format!("username '{}'", user)));
        }
        self.store.ensure_user_dir(&user)?;
        self.registry.register(&user)?;
        info!(user = %user, "registered user");
        Ok(user)
    }

    /// Log in as a registered user and remember the session.
    ///
    /// Fails with `NotFound` for unknown usernames. The user's directory
    /// is recreated if it went missing since registration.
    pub fn login(&self, raw: &str) -> Result<Username> {
        let user = Username::parse(raw)?;
        if !self.registry.contains(&user) {
            return Err(Error::not_found(format!("username '{}'", user)));
        }
        self.store.ensure_user_dir(&user)?;

        let mut config = Config::load(&self.data_dir);
        config.current_user = Some(user.clone());
        config.save(&self.data_dir)?;
        info!(user = %user, "logged in");
        Ok(user)
    }

    /// Clear the saved session, returning who was logged in
    pub fn logout(&self) -> Result<Option<Username>> {
        let mut config = Config::load(&self.data_dir);
        let previous = config.current_user.take();
        config.save(&self.data_dir)?;
        Ok(previous)
    }

    /// Whether a username is still free (for interactive feedback before
    /// registering)
    pub fn is_available(&self, raw: &str) -> Result<bool> {
        let user = Username::parse(raw)?;
        Ok(!self.registry.contains(&user))
    }

    /// Whether a normalized username is registered
    pub fn is_registered(&self, user: &Username) -> bool {
        self.registry.contains(user)
    }
}
