use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{debug, info};

use crate::{
    cli::{
        colors::DISC_GOLD,
        commands::Flow,
        messages::{highlight_argument, system_message},
        parsers::{MenuCommand, parse_menu_choice},
    },
    config::Config,
    persistence::InventoryError,
    sessions::session::Session,
};

mod colors;
mod commands;
mod console;
mod messages;
pub mod parsers;
mod splash_screen;

pub use console::Console;

const MENU_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

pub fn run_client(config: &Config) -> Result<(), InventoryError> {
    //! Start an interactive session on the terminal: create the inventory
    //! file if needed, load it and hand over to the menu loop.

    splash_screen::splash_screen();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut session = open_session(config, &mut console)?;

    start_repl(&mut session, &mut console)
}

pub fn open_session<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<Session, InventoryError> {
    //! Make sure the inventory file exists and load it into a new session.

    console.say(system_message(
        "store",
        format!(
            "Inventory file is '{}'.",
            highlight_argument(&config.inventory_file.display().to_string())
        ),
    ))?;
    console.say(system_message("store", "loading data...".to_string()))?;

    let session = Session::open(config)?;
    info!(
        "session opened on '{}' with {} record(s)",
        session.store_path().display(),
        session.table().len()
    );
    Ok(session)
}

pub fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), InventoryError> {
    console.say("Menu\n")?;
    for command in MenuCommand::ALL {
        console.say(format!(
            "[{}] {}",
            command.key().to_string().color(DISC_GOLD),
            command.description()
        ))?;
    }
    console.blank_line()
}

fn menu_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<MenuCommand>, InventoryError> {
    //! Keep asking until the answer is one of the menu keys.
    //!
    //! Returns [`None`] once the input is exhausted.

    loop {
        let Some(answer) = console.prompt(MENU_PROMPT)? else {
            return Ok(None);
        };

        if let Some(command) = parse_menu_choice(&answer) {
            console.blank_line()?;
            return Ok(Some(command));
        }
    }
}

pub fn start_repl<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<(), InventoryError> {
    //! Run the menu loop until the user exits or the input runs out.
    //!
    //! Errors from reloading a malformed file end the loop and are returned
    //! to the caller; nothing is saved on the way out.

    console.say(system_message(
        "system",
        format!(
            "New session initiated at '{}'.",
            highlight_argument(&session.start_time_string())
        ),
    ))?;

    loop {
        show_menu(console)?;

        let Some(command) = menu_choice(console)? else {
            break;
        };
        debug!("menu command {:?}", command);

        let flow = match command {
            MenuCommand::Exit => Flow::Quit,
            MenuCommand::Load => commands::load_inventory(session, console)?,
            MenuCommand::Add => commands::add_cd(session, console)?,
            MenuCommand::Display => commands::show_inventory(session, console)?,
            MenuCommand::Delete => commands::delete_cd(session, console)?,
            MenuCommand::Save => commands::save_inventory(session, console)?,
        };

        if flow == Flow::Quit {
            break;
        }
    }

    console.say("Goodbye!")
}
