//! Shared library modules for the rollbook application.

/// Application configuration loading, saving and interactive setup.
pub mod config;

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// Date of birth parsing and display formatting.
pub mod dob;

/// User-facing message types, formatting and display macros.
pub mod messages;

/// The student record and raw form-input types.
pub mod student;

/// Field validation rules shared by the form and the data layer.
pub mod validation;

/// Terminal table rendering for student records.
pub mod view;
