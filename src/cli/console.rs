//! A small wrapper around the terminal streams.
//!
//! The REPL never touches `stdin`/`stdout` directly; it goes through a
//! [`Console`] so a session can just as well be driven by any reader and
//! writer pair, which is how the scripted sessions in the tests work.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::persistence::InventoryError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), InventoryError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), InventoryError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn prompt(&mut self, question: &str) -> Result<Option<String>, InventoryError> {
        //! Print `question` without a newline and read one line of answer.
        //!
        //! Returns [`None`] once the input is exhausted, otherwise the line
        //! without its line terminator.

        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = buffer.trim_end_matches(['\r', '\n']);
        Ok(Some(answer.to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
