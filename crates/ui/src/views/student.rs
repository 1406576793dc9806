use std::io::{BufRead, Write};

use services::CatalogServiceError;

use crate::console::Console;
use crate::context::AppContext;
use crate::error::SessionError;
use crate::routes::{Flow, StudentAction};
use crate::views::{INVALID_CHOICE, NO_PASSAGES};
use crate::vm::{map_attempt_feedback, map_passage_listing, map_progress, parse_selection};

/// Student menu loop; returns when the student exits or input ends.
///
/// # Errors
///
/// Returns `SessionError` on terminal failure or if progress cannot be saved.
pub fn student_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
    name: &str,
) -> Result<(), SessionError> {
    loop {
        console.blank()?;
        console.say_all([
            "=== Menu ===",
            "1. Read & answer",
            "2. View progress",
            "3. Exit",
        ])?;
        let Some(choice) = console.prompt("Choose: ")? else {
            return Ok(());
        };

        let flow = match StudentAction::from_choice(&choice) {
            Some(StudentAction::ReadPassage) => read_passage(console, ctx, name)?,
            Some(StudentAction::ViewProgress) => view_progress(console, ctx, name)?,
            Some(StudentAction::Exit) => {
                console.say("Goodbye...")?;
                Flow::Exit
            }
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

/// Pick a passage, show it, ask its question and record the attempt.
///
/// # Errors
///
/// Returns `SessionError` on terminal failure or if progress cannot be saved.
pub fn read_passage<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut AppContext,
    name: &str,
) -> Result<Flow, SessionError> {
    if ctx.catalog.catalog().is_empty() {
        console.say(NO_PASSAGES)?;
        return Ok(Flow::Continue);
    }

    console.blank()?;
    console.say("=== Passages ===")?;
    console.say_all(map_passage_listing(ctx.catalog.passages()))?;
    console.blank()?;

    let Some(raw) = console.prompt("Choose a passage number: ")? else {
        return Ok(Flow::Exit);
    };
    let passage = match parse_selection(&raw).map(|index| ctx.catalog.select(index)) {
        Some(Ok(passage)) => passage.clone(),
        Some(Err(CatalogServiceError::Catalog(_))) | None => {
            console.say(INVALID_CHOICE)?;
            return Ok(Flow::Continue);
        }
        Some(Err(err)) => return Err(err.into()),
    };

    console.blank()?;
    console.say("=== Passage ===")?;
    console.say(passage.body())?;
    console.blank()?;
    if console
        .prompt("Press ENTER when you have finished reading...")?
        .is_none()
    {
        return Ok(Flow::Exit);
    }

    console.blank()?;
    console.say("=== Question ===")?;
    let Some(answer) = console.prompt(&format!("{}: ", passage.question()))? else {
        return Ok(Flow::Exit);
    };

    let result = ctx.progress.submit_answer(name, &passage, &answer)?;
    let feedback = map_attempt_feedback(&result);
    console.say(feedback.verdict)?;
    if let Some(bonus) = feedback.bonus {
        console.say(bonus)?;
    }
    Ok(Flow::Continue)
}

/// Print points, streak and attempt history for the signed-in student.
///
/// # Errors
///
/// Returns `SessionError::Io` if the terminal fails.
pub fn view_progress<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &AppContext,
    name: &str,
) -> Result<Flow, SessionError> {
    let Some(record) = ctx.progress.student(name) else {
        console.say("No progress yet.")?;
        return Ok(Flow::Continue);
    };
    let vm = map_progress(record);

    console.blank()?;
    console.say("=== Your Progress ===")?;
    console.say(vm.points_label)?;
    console.say(vm.streak_label)?;
    console.blank()?;
    console.say("History:")?;
    console.say_all(vm.history_rows)?;
    Ok(Flow::Continue)
}
