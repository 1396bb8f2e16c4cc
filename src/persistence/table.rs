use super::record::Record;

use std::fmt::Display;

use log::debug;

/// The in-memory inventory for a session.
///
/// Records keep their insertion (or load) order and there is no index: every
/// lookup is a linear scan. Id uniqueness is checked at the input boundary
/// with [`super::validate_new_id`], not by [`Table::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    pub fn new() -> Table {
        Table { rows: Vec::new() }
    }

    pub fn from_records(rows: Vec<Record>) -> Table {
        Table { rows }
    }

    pub fn add(&mut self, record: Record) -> &mut Table {
        //! Append a record at the end of the table.
        //!
        //! Returns the table itself so calls can be chained.

        debug!("adding record {} to the inventory", record.id);
        self.rows.push(record);
        self
    }

    pub fn delete(&mut self, id: i64) -> Option<Record> {
        //! Remove the record with the matching `id`.
        //!
        //! Deleting an id that is not there leaves the table untouched and
        //! returns [`None`]; telling the user about it is up to the caller.

        let position = self.rows.iter().position(|record| record.id == id)?;
        debug!("deleting record {} at position {}", id, position);
        Some(self.rows.remove(position))
    }

    pub fn replace(&mut self, rows: Vec<Record>) {
        //! Throw away the current contents and take `rows` instead.

        self.rows = rows;
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.iter().any(|record| record.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.rows.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "======= The Current Inventory: =======")?;
        writeln!(f, "ID\tCD Title (by: Artist)\n")?;
        for record in self.rows.iter() {
            writeln!(f, "{}", record)?;
        }
        write!(f, "======================================")
    }
}
