//! General message formatting functions for prettifying the CLI.
//! Includes basic utility functions such as:
//!
//! - Highlight Text (make the text disc gold but not bold)
//! - Warning Text (make the text orange and bold)
//! - System message formatting functions that produce the same
//! format messages.

use colored::Colorize;

use crate::cli::colors::{DISC_GOLD, WARNING_ORANGE};

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the disc gold
    //! color to make it obvious.
    //!
    //! Returns a formatted string.

    format!("{}", argument.color(DISC_GOLD))
}

pub fn warning(text: &str) -> String {
    format!("{}", text.color(WARNING_ORANGE).bold())
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.
    //!
    //! Takes in a source name (like 'system') as [`str`] and
    //! the message as a formatted text; output of [`format!`].

    let source_formatted = format!("{:6}", source_name.color(DISC_GOLD).bold());

    format!("[{}] {}", source_formatted, message)
}
