//! Login command - start and end sessions

use anyhow::Result;
use dialoguer::Input;

use crate::output;

use super::get_context;

pub fn run(username: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let raw = match username {
        Some(name) => name,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let user = ctx.account_service.login(&raw)?;
    output::success(&format!("Logged in as '{}'", user));
    Ok(())
}

pub fn run_logout() -> Result<()> {
    let ctx = get_context()?;

    match ctx.account_service.logout()? {
        Some(user) => output::warning(&format!("Logged out '{}'", user)),
        None => println!("No user was logged in"),
    }
    Ok(())
}
