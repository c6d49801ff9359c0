//! CLI command implementations

pub mod exercise;
pub mod history;
pub mod log;
pub mod login;
pub mod register;
pub mod status;
pub mod suggest;

use std::path::PathBuf;

use anyhow::{Context, Result};

use liftlog_core::{LiftlogContext, Username};

/// Get the liftlog directory from environment or default
pub fn get_liftlog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LIFTLOG_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".liftlog")
    }
}

/// Get or create liftlog context
pub fn get_context() -> Result<LiftlogContext> {
    let liftlog_dir = get_liftlog_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&liftlog_dir)
        .with_context(|| format!("Failed to create liftlog directory: {:?}", liftlog_dir))?;

    LiftlogContext::new(&liftlog_dir).context("Failed to initialize liftlog context")
}

/// The user a command acts on: an explicit `--user` override, or else the
/// session saved by `ll login`. The override must name a registered user.
pub fn resolve_user(ctx: &LiftlogContext, flag: Option<String>) -> Result<Username> {
    match flag {
        Some(raw) => {
            let user = Username::parse(&raw)?;
            if !ctx.account_service.is_registered(&user) {
                anyhow::bail!("Unknown user '{}'. Register with 'll register {}'", user, user);
            }
            Ok(user)
        }
        None => ctx
            .config
            .current_user
            .clone()
            .context("No user logged in. Run 'll login <username>' or pass --user"),
    }
}
