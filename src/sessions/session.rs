//! The only point of truth for everything related to the current user
//! session. A session owns the in-memory inventory [`Table`], knows which
//! file it was loaded from and when it started.
//!
//! There is exactly one session per process and nothing else keeps a copy of
//! the table. The interactive loop borrows the session mutably for each
//! command, so every operation sees the latest state.
//!
//! Leaving a session never saves anything. Unsaved changes are lost unless
//! [`Session::save`] was called.

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};
use log::info;

use crate::config::Config;
use crate::persistence::{self, InventoryError, Table};

pub struct Session {
    table: Table,
    store_path: PathBuf,
    start_time: SystemTime,
}

impl Session {
    pub fn client(config: &Config) -> Session {
        //! Returns a new client session with an empty table. Nothing is read
        //! from disk yet; see [`Session::open`] for that.

        Session {
            table: Table::new(),
            store_path: config.inventory_file.clone(),
            start_time: SystemTime::now(),
        }
    }

    pub fn open(config: &Config) -> Result<Session, InventoryError> {
        //! Returns a client session populated from the configured inventory
        //! file, creating the file first if it does not exist.

        let mut session = Session::client(config);
        persistence::ensure_exists(&session.store_path)?;
        session.reload()?;
        Ok(session)
    }

    pub fn reload(&mut self) -> Result<usize, InventoryError> {
        //! Replace the table with the contents of the inventory file.
        //! Unsaved changes are discarded.

        let n_rows = persistence::load(&self.store_path, &mut self.table)?;
        info!(
            "reloaded {} record(s) from '{}'",
            n_rows,
            self.store_path.display()
        );
        Ok(n_rows)
    }

    pub fn save(&self) -> Result<usize, InventoryError> {
        //! Overwrite the inventory file with the current table.

        let n_rows = persistence::save(&self.store_path, &self.table)?;
        info!("saved {} record(s) to '{}'", n_rows, self.store_path.display());
        Ok(n_rows)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
