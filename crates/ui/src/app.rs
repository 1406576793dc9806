use std::io::{BufRead, Write};

use crate::console::Console;
use crate::context::AppContext;
use crate::error::SessionError;
use crate::routes::Route;
use crate::views::{admin_menu, role_select, student_menu};

/// One interactive session: role selection, then a single role's menu.
pub struct App<R, W> {
    console: Console<R, W>,
    ctx: AppContext,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(ctx: AppContext, input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            ctx,
        }
    }

    /// Drive the session until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on terminal failure or if a store cannot be written.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut route = Route::RoleSelect;
        loop {
            route = match route {
                Route::RoleSelect => role_select(&mut self.console, &mut self.ctx)?,
                Route::Student { name } => {
                    student_menu(&mut self.console, &mut self.ctx, &name)?;
                    Route::Exit
                }
                Route::Admin => {
                    admin_menu(&mut self.console, &mut self.ctx)?;
                    Route::Exit
                }
                Route::Exit => return Ok(()),
            };
        }
    }

    pub fn into_parts(self) -> (AppContext, W) {
        (self.ctx, self.console.into_output())
    }
}
