use std::io::{BufRead, Write};

use literacy_core::model::PassageDraft;
use services::CatalogServiceError;

use crate::console::Console;
use crate::context::AppContext;
use crate::error::SessionError;
use crate::routes::{AdminAction, Flow};
use crate::views::{INVALID_CHOICE, NO_PASSAGES};
use crate::vm::{map_passage_listing, map_ranking, parse_selection};

/// Admin menu loop; returns when the admin exits or input ends.
///
/// # Errors
///
/// Returns `SessionError` on terminal failure or if the catalog cannot be saved.
pub fn admin_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
) -> Result<(), SessionError> {
    loop {
        console.blank()?;
        console.say_all([
            "=== ADMIN MODE ===",
            "1. Add passage",
            "2. List passages",
            "3. Delete passage",
            "4. Student ranking",
            "5. Leave admin mode",
        ])?;
        let Some(choice) = console.prompt("Choose: ")? else {
            return Ok(());
        };

        let flow = match AdminAction::from_choice(&choice) {
            Some(AdminAction::AddPassage) => add_passage(console, ctx)?,
            Some(AdminAction::ListPassages) => list_passages(console, ctx)?,
            Some(AdminAction::DeletePassage) => delete_passage(console, ctx)?,
            Some(AdminAction::Ranking) => show_ranking(console, ctx)?,
            Some(AdminAction::Exit) => Flow::Exit,
            None => {
                console.say(INVALID_CHOICE)?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// # Errors
///
/// Returns `SessionError` on terminal failure or if the catalog cannot be saved.
pub fn add_passage<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
) -> Result<Flow, SessionError> {
    console.blank()?;
    console.say("=== Add Passage ===")?;

    let Some(title) = console.prompt("Title: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(body) = console.prompt("Text: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(question) = console.prompt("Question: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(answer_key) = console.prompt("Correct answer: ")? else {
        return Ok(Flow::Exit);
    };

    match ctx
        .catalog
        .add_passage(PassageDraft::new(title, body, question, answer_key))
    {
        Ok(_) => console.say("Passage added!")?,
        Err(CatalogServiceError::Passage(err)) => {
            console.say(format!("Passage not added: {err}"))?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(Flow::Continue)
}

/// # Errors
///
/// Returns `SessionError::Io` if the terminal fails.
pub fn list_passages<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &AppContext,
) -> Result<Flow, SessionError> {
    console.blank()?;
    console.say("=== Passages ===")?;
    if ctx.catalog.catalog().is_empty() {
        console.say(NO_PASSAGES)?;
    } else {
        console.say_all(map_passage_listing(ctx.catalog.passages()))?;
    }
    Ok(Flow::Continue)
}

/// # Errors
///
/// Returns `SessionError` on terminal failure or if the catalog cannot be saved.
pub fn delete_passage<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
) -> Result<Flow, SessionError> {
    list_passages(console, ctx)?;
    let Some(raw) = console.prompt("Number of the passage to delete: ")? else {
        return Ok(Flow::Exit);
    };

    let Some(index) = parse_selection(&raw) else {
        console.say(INVALID_CHOICE)?;
        return Ok(Flow::Continue);
    };
    match ctx.catalog.delete_at(index) {
        Ok(_) => console.say("Passage deleted!")?,
        Err(CatalogServiceError::Catalog(_)) => console.say(INVALID_CHOICE)?,
        Err(err) => return Err(err.into()),
    }
    Ok(Flow::Continue)
}

/// # Errors
///
/// Returns `SessionError::Io` if the terminal fails.
pub fn show_ranking<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &AppContext,
) -> Result<Flow, SessionError> {
    console.blank()?;
    console.say("=== Student Ranking ===")?;
    let rows = map_ranking(&ctx.progress.ranking());
    if rows.is_empty() {
        console.say("No students yet!")?;
    }
    for row in rows {
        console.say(row.label)?;
    }
    Ok(Flow::Continue)
}
