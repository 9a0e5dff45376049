use dialoguer::{Confirm, Input, Select};

use crate::cli::OutputFormat;
use crate::error::{Result, TrackerError};
use crate::models::FoodField;
use crate::state::{EditMode, Submission, TrackerSession};

use super::render::display_session;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Submit,
    Edit,
    Delete,
    CancelEdit,
    Show,
    Quit,
}

/// Menu entries available in the current state, with their labels.
fn menu_for(session: &TrackerSession) -> Vec<(MenuAction, String)> {
    let mut items = vec![(MenuAction::Submit, session.submit_label().to_string())];

    if !session.entries().is_empty() {
        items.push((MenuAction::Edit, "Edit entry".to_string()));
        items.push((MenuAction::Delete, "Delete entry".to_string()));
    }
    if let EditMode::Editing(index) = session.mode() {
        items.push((MenuAction::CancelEdit, format!("Cancel edit of row {}", index + 1)));
    }
    items.push((MenuAction::Show, "Show ledger".to_string()));
    items.push((MenuAction::Quit, "Quit".to_string()));
    items
}

/// Run the prompt-driven session until the user quits.
pub fn run_interactive(session: &mut TrackerSession, format: OutputFormat) -> Result<()> {
    println!("Food Tracker");
    println!();

    loop {
        let items = menu_for(session);
        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match items[selection].0 {
            MenuAction::Submit => prompt_submit(session),
            MenuAction::Edit => prompt_begin_edit(session),
            MenuAction::Delete => prompt_delete(session),
            MenuAction::CancelEdit => {
                session.cancel_edit();
                println!("Edit cancelled.");
                Ok(())
            }
            MenuAction::Show => display_session(session, format),
            MenuAction::Quit => break,
        };

        // Prompt failures end the session; anything else is reported and the loop goes on.
        match outcome {
            Err(e @ TrackerError::Prompt(_)) => return Err(e),
            Err(e) => println!("{}", e),
            Ok(()) => {}
        }
        println!();
    }

    Ok(())
}

/// Fill in each field, pre-filled from the draft, then submit.
fn prompt_submit(session: &mut TrackerSession) -> Result<()> {
    for field in FoodField::ALL {
        let current = session.draft().get(field).to_string();
        let value: String = Input::new()
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        session.update_draft_field(field.key(), value)?;
    }

    match session.submit()? {
        Submission::Added(index) => println!("Added row {}.", index + 1),
        Submission::Updated(index) => println!("Updated row {}.", index + 1),
    }
    display_session(session, OutputFormat::Table)
}

fn prompt_begin_edit(session: &mut TrackerSession) -> Result<()> {
    if let Some(index) = select_row(session, "Which entry do you want to edit?")? {
        session.begin_edit(index)?;
        println!(
            "Editing row {}. Choose '{}' to save changes.",
            index + 1,
            session.submit_label()
        );
    }
    Ok(())
}

fn prompt_delete(session: &mut TrackerSession) -> Result<()> {
    let Some(index) = select_row(session, "Which entry do you want to delete?")? else {
        return Ok(());
    };

    let name = session.entries()[index].name.clone();
    let confirmed = prompt_yes_no(&format!("Delete '{}'?", name), false)?;
    if confirmed {
        let was_editing = session.active_index().is_some();
        session.delete_at(index)?;
        println!("Deleted '{}'.", name);
        if was_editing && session.active_index().is_none() {
            println!("The edit in progress was cancelled.");
        }
    }
    Ok(())
}

/// Pick a ledger row. Returns `None` if the user backs out.
fn select_row(session: &TrackerSession, prompt: &str) -> Result<Option<usize>> {
    let mut options: Vec<String> = session
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{:>3}. {} - {} cal, P:{} C:{} F:{}",
                i + 1,
                e.name,
                e.calories,
                e.protein,
                e.carbohydrate,
                e.fat
            )
        })
        .collect();
    let rows = options.len();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < rows).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
