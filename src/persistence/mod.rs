//! Persistence for the inventory needs to have the following components
//! - Record (one CD entry: an integer id, a title and an artist)
//! - Table (the ordered, in-memory collection of records for a session)
//! - Codec (reads and writes the table as comma-delimited lines)
//!

//  All modules of this lib
mod codec;
mod error;
mod record;
mod table;

//  External API
pub use codec::{ensure_exists, load, save};
pub use error::InventoryError;
pub use record::{Record, parse_id, validate_new_id};
pub use table::Table;
