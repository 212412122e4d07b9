//! Configuration management for the rollbook application.
//!
//! Settings live in a JSON file in the platform-specific application data
//! directory and are fixed at process start. The only configurable module is
//! the database section, which names the SQLite file the register lives in;
//! an interactive wizard fills it in on `rollbook init`.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\rollbook\rollbook\config.json`
//! - **macOS**: `~/Library/Application Support/rollbook/rollbook/config.json`
//! - **Linux**: `~/.local/share/rollbook/rollbook/config.json`

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name, used when no configuration exists.
pub const DEFAULT_DB_FILE: &str = "rollbook.db";

/// Database settings passed explicitly to the data layer.
///
/// The storage engine is embedded SQLite, so connection settings collapse to
/// a file name resolved inside the application data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    /// SQLite database file name inside the application data directory.
    pub file: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            file: DEFAULT_DB_FILE.to_string(),
        }
    }
}

/// Main configuration container for the application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Database settings; `None` means the built-in defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DbConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default configuration
    /// so the application runs without any setup.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|_| msg_error_anyhow!(Message::DataStoragePathError))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|_| msg_error_anyhow!(Message::DataStoragePathError))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard
    /// only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let current = config.database.unwrap_or_default();
        let file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Database file name")
            .default(current.file)
            .interact_text()?;

        config.database = Some(DbConfig { file });
        Ok(config)
    }

    /// The effective database settings, falling back to defaults.
    pub fn db_config(&self) -> DbConfig {
        self.database.clone().unwrap_or_default()
    }
}
