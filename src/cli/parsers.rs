//! The place where the command line and menu parsers are defined.
//!
//! The binary takes no operational arguments; [`CliParser`] only exists so
//! `--help` and `--version` behave like any other tool. Everything else is
//! chosen from the interactive menu.

use clap::Parser;

#[derive(Parser)]
#[command(name = "cd_inventory", version)]
#[command(
    about = "A tiny CD inventory kept in a flat text file",
    long_about = "A tiny CD inventory kept in a flat text file.\n\n\
        The inventory file defaults to 'CDInventory.txt' and can be changed \
        with the CD_INVENTORY_FILE environment variable or a .env file."
)]
pub struct CliParser {}

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::Load,
        MenuCommand::Add,
        MenuCommand::Display,
        MenuCommand::Delete,
        MenuCommand::Save,
        MenuCommand::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            MenuCommand::Load => 'l',
            MenuCommand::Add => 'a',
            MenuCommand::Display => 'i',
            MenuCommand::Delete => 'd',
            MenuCommand::Save => 's',
            MenuCommand::Exit => 'x',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuCommand::Load => "load Inventory from file",
            MenuCommand::Add => "Add CD",
            MenuCommand::Display => "Display Current Inventory",
            MenuCommand::Delete => "delete CD from Inventory",
            MenuCommand::Save => "Save Inventory to file",
            MenuCommand::Exit => "exit",
        }
    }
}

pub fn parse_menu_choice(input: &str) -> Option<MenuCommand> {
    //! Match the user's answer against the menu keys. Case and surrounding
    //! whitespace are ignored.
    //!
    //! Returns [`None`] for anything that is not a menu key.

    let choice = input.trim().to_lowercase();
    MenuCommand::ALL
        .into_iter()
        .find(|command| choice.len() == 1 && choice.starts_with(command.key()))
}
