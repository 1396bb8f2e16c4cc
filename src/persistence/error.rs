use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while working with the inventory.
///
/// The first two variants come from the file store, the id variants come
/// from validating user input and the last one from the terminal itself.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed line {line} in '{}': {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("invalid id '{0}': not an integer")]
    InvalidId(String),

    #[error("duplicate id {0}: already in the inventory")]
    DuplicateId(i64),

    #[error("console error: {0}")]
    Console(#[from] io::Error),
}

impl InventoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> InventoryError {
        InventoryError::Io {
            path: path.into(),
            source,
        }
    }
}
