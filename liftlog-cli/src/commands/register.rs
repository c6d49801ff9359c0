//! Register command - create a new user account

use anyhow::Result;
use dialoguer::Input;

use liftlog_core::LiftlogContext;

use crate::output;

use super::get_context;

pub fn run(username: Option<String>) -> Result<()> {
    let mut ctx = get_context()?;

    let raw = match username {
        Some(name) => name,
        None => prompt_username(&ctx)?,
    };
    let typed = raw.trim().to_string();

    let user = ctx.account_service.register(&typed)?;

    output::success(&format!("Registered '{}'", typed));
    if typed != user.as_str() {
        println!("  Stored as '{}' (usernames are case-insensitive)", user);
    }
    output::info(&format!("  Log in with: ll login {}", user));
    Ok(())
}

/// Prompt for a username, checking availability as it is entered
fn prompt_username(ctx: &LiftlogContext) -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Username")
        .validate_with(|input: &String| -> Result<(), String> {
            match ctx.account_service.is_available(input) {
                Ok(true) => Ok(()),
                Ok(false) => Err(format!(
                    "username '{}' is already taken",
                    input.trim().to_lowercase()
                )),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()?;
    Ok(name)
}
