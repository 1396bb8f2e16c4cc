use std::fmt::Display;

use serde::Serialize;

use super::error::InventoryError;
use super::table::Table;

/// A single CD in the inventory.
///
/// Field order matters: it is the column order of the inventory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Record {
    pub fn new(id: i64, title: &str, artist: &str) -> Record {
        Record {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

pub fn parse_id(text: &str) -> Result<i64, InventoryError> {
    //! Parse a user supplied id. Surrounding whitespace is ignored.
    //!
    //! Returns [`InventoryError::InvalidId`] for anything that is not
    //! a decimal integer.

    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| InventoryError::InvalidId(text.to_string()))
}

pub fn validate_new_id(id: i64, table: &Table) -> Result<(), InventoryError> {
    //! Check that `id` can be added to `table` without breaking uniqueness.

    if table.contains(id) {
        Err(InventoryError::DuplicateId(id))
    } else {
        Ok(())
    }
}
