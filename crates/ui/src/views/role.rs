use std::io::{BufRead, Write};

use crate::console::Console;
use crate::context::AppContext;
use crate::error::SessionError;
use crate::routes::{Role, Route};

/// Ask for a role and sign in.
///
/// A wrong admin password ends the session; there is no retry.
///
/// # Errors
///
/// Returns `SessionError::Io` if the terminal fails.
pub fn role_select<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
) -> Result<Route, SessionError> {
    console.say("=== Digital Literacy ===")?;
    let Some(choice) = console.prompt("Sign in as (1=Student, 2=Admin): ")? else {
        return Ok(Route::Exit);
    };

    match Role::from_choice(&choice) {
        Role::Admin => {
            let Some(password) = console.prompt("Admin password: ")? else {
                return Ok(Route::Exit);
            };
            if ctx.admin_password_matches(&password) {
                tracing::info!("admin signed in");
                Ok(Route::Admin)
            } else {
                tracing::warn!("admin sign-in rejected");
                console.say("Wrong password!")?;
                Ok(Route::Exit)
            }
        }
        Role::Student => {
            let name = loop {
                let Some(raw) = console.prompt("Enter your name: ")? else {
                    return Ok(Route::Exit);
                };
                let name = raw.trim();
                if !name.is_empty() {
                    break name.to_owned();
                }
            };
            ctx.progress.login(&name);
            console.blank()?;
            console.say(format!("Welcome, {name}!"))?;
            Ok(Route::Student { name })
        }
    }
}
