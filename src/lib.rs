//! # Rollbook - Student Records Manager
//!
//! A terminal utility for keeping a single register of student records:
//! names, ages, grades, contact details and dates of birth.
//!
//! ## Features
//!
//! - **Record Management**: Add, update and delete student records
//! - **Register View**: Render the full register as a terminal table
//! - **Search**: Match records by id, age or free-text field content
//! - **Interactive Form**: A prompt-driven session mirroring a record-entry form
//! - **Validation**: The same field rules enforced in the form and in the data layer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
