use crate::libs::config::{Config, DbConfig};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use rusqlite::Connection;

/// Schema bootstrap target. Safe to execute repeatedly; never drops data.
const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER,
    grade TEXT,
    phone TEXT,
    address TEXT,
    dob DATE
)";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database named by the saved configuration, creating the
    /// file and the `students` table if they do not exist yet.
    pub fn new() -> Result<Db> {
        Self::with_config(&Config::read()?.db_config())
    }

    /// Opens the database described by an explicit configuration.
    pub fn with_config(config: &DbConfig) -> Result<Db> {
        let db_file_path = DataStorage::new()
            .get_path(&config.file)
            .map_err(|_| msg_error_anyhow!(Message::DataStoragePathError))?;
        msg_debug!(format!("Opening database: {}", db_file_path.display()));
        let conn = Connection::open(db_file_path)?;
        conn.execute(SCHEMA_STUDENTS, [])?;

        Ok(Db { conn })
    }
}
