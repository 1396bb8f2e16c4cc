//! Runtime configuration, read from the environment once at startup.
//!
//! A `.env` file in the working directory is loaded by the binary before
//! [`Config::from_env`] runs, so either place works for setting these.

use std::env;
use std::path::{Path, PathBuf};

/// The inventory file used when nothing else is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "CDInventory.txt";

/// Environment variable that points the session at another inventory file.
pub const INVENTORY_FILE_VAR: &str = "CD_INVENTORY_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inventory_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Config {
        //! Build the configuration from the process environment. An unset
        //! or blank variable falls back to [`DEFAULT_INVENTORY_FILE`].

        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        //! Same as [`Config::from_env`], reading variables through `lookup`.

        let inventory_file = lookup(INVENTORY_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INVENTORY_FILE.to_string());

        Config {
            inventory_file: PathBuf::from(inventory_file),
        }
    }

    pub fn with_inventory_file(path: impl AsRef<Path>) -> Config {
        Config {
            inventory_file: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::with_inventory_file(DEFAULT_INVENTORY_FILE)
    }
}
