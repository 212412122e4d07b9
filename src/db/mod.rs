//! Database layer for the rollbook application.
//!
//! Provides the data persistence layer built on SQLite: connection handling,
//! idempotent schema bootstrap and the CRUD/query operations for the single
//! `students` table. All validation happens here before any write is issued,
//! so a failed operation never leaves partial state behind.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollbook::db::students::Students;
//! use rollbook::libs::student::StudentForm;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut students = Students::new()?;
//! let form = StudentForm::new("Alice", "12", "5", "555", "Elm Street", "01/01/2012");
//! let id = students.insert(&form)?;
//! let all = students.fetch_all()?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and schema bootstrap module.
///
/// Provides the `Db` struct that opens the SQLite database in the
/// platform data directory and ensures the `students` table exists.
pub mod db;

/// Student record operations.
///
/// Handles CRUD and search for student records, including the server-side
/// validation and the blank-to-NULL conversion of optional fields.
pub mod students;
