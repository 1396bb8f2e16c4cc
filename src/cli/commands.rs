//! This module is where all the menu commands are handled.
//!
//! Inventory menu:
//!
//! - l | reload the inventory from file (asks for 'yes' first)
//! - a | add a CD, re-asking for the id until it is a new integer
//! - i | display the current inventory
//! - d | delete a CD by id, with retry or return to menu when not found
//! - s | save the inventory to file (asks for 'y' first)
//! - x | leave without saving
//!
//! Every handler returns a [`Flow`] telling the REPL whether to keep going.
//! Running out of input in the middle of a prompt ends the session.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::cli::console::Console;
use crate::cli::messages::{highlight_argument, system_message, warning};
use crate::persistence::{InventoryError, Record, parse_id, validate_new_id};
use crate::sessions::session::Session;

/// What the REPL should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Unwraps a prompt answer, or ends the session when input ran out.
macro_rules! answer_or_quit {
    ($answer:expr) => {
        match $answer {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

pub fn show_inventory<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> Result<Flow, InventoryError> {
    console.say(session.table())?;
    Ok(Flow::Continue)
}

pub fn load_inventory<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow, InventoryError> {
    //! Reload the table from disk after an explicit 'yes'. A malformed file
    //! is not recovered from: the error goes straight back to the caller.

    console.say(warning(
        "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
    ))?;
    let answer = answer_or_quit!(console.prompt(
        "Type 'yes' to continue and reload from file. otherwise reload will be canceled: "
    )?);

    if answer.trim().eq_ignore_ascii_case("yes") {
        console.say(system_message("store", "reloading...".to_string()))?;
        session.reload()?;
    } else {
        debug!("reload canceled by the user");
        answer_or_quit!(console.prompt(
            "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu."
        )?);
    }

    show_inventory(session, console)
}

pub fn add_cd<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow, InventoryError> {
    let id = loop {
        let answer = answer_or_quit!(console.prompt("Enter an ID: ")?);
        let checked = parse_id(&answer).and_then(|id| {
            validate_new_id(id, session.table())?;
            Ok(id)
        });

        match checked {
            Ok(id) => break id,
            Err(InventoryError::InvalidId(_)) => console.say(system_message(
                "input",
                "Invalid ID. Please enter an integer ID.".to_string(),
            ))?,
            Err(InventoryError::DuplicateId(id)) => console.say(system_message(
                "input",
                format!(
                    "Duplicate ID {}. Please try again.",
                    highlight_argument(&id.to_string())
                ),
            ))?,
            Err(error) => return Err(error),
        }
    };

    let title = answer_or_quit!(console.prompt("What is the CD's title? ")?);
    let artist = answer_or_quit!(console.prompt("What is the Artist's name? ")?);

    session
        .table_mut()
        .add(Record::new(id, title.trim(), artist.trim()));

    show_inventory(session, console)
}

pub fn delete_cd<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow, InventoryError> {
    show_inventory(session, console)?;

    loop {
        let answer = answer_or_quit!(console.prompt("Which ID would you like to delete? ")?);
        let id = match parse_id(&answer) {
            Ok(id) => id,
            Err(_) => {
                console.say(system_message(
                    "input",
                    "Invalid ID. Please enter an integer ID.".to_string(),
                ))?;
                continue;
            }
        };

        if session.table_mut().delete(id).is_some() {
            console.say(system_message("store", "The CD was removed".to_string()))?;
            break;
        }

        console.say(system_message(
            "store",
            format!(
                "Sorry that ID {} does not exist.",
                highlight_argument(&id.to_string())
            ),
        ))?;
        let escape = answer_or_quit!(
            console.prompt("Type 'm' to return to menu or any key to try again: ")?
        );
        if escape.trim() == "m" {
            break;
        }
    }

    show_inventory(session, console)
}

pub fn save_inventory<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow, InventoryError> {
    //! Write the table to disk after an explicit 'y'. A failed write is
    //! reported and the session carries on with its table intact.

    show_inventory(session, console)?;
    let answer = answer_or_quit!(console.prompt("Save this inventory to file? [y/n] ")?);

    if answer.trim().eq_ignore_ascii_case("y") {
        match session.save() {
            Ok(_) => console.say(system_message("store", "Inventory saved".to_string()))?,
            Err(error) => {
                warn!("saving the inventory failed: {}", error);
                console.say(system_message(
                    "store",
                    warning(&format!("Inventory NOT saved: {}", error)),
                ))?;
            }
        }
    } else {
        answer_or_quit!(console.prompt(
            "The inventory was NOT saved to file. Press [ENTER] to return to the menu."
        )?);
    }

    Ok(Flow::Continue)
}
