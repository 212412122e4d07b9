//! Display implementation for rollbook application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! at the terminal. Keeping every user-facing string in one place keeps the
//! wording consistent and makes the messages easy to revise.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentAdded(id) => format!("Student #{} added", id),
            Message::StudentUpdated(id) => format!("Student #{} updated", id),
            Message::StudentDeleted(id) => format!("Student #{} deleted", id),
            Message::StudentNotFound(id) => format!("No student with id {}", id),
            Message::NoStudentsFound => "No students recorded yet".to_string(),
            Message::StudentListHeader => "📋 Student register".to_string(),
            Message::EditingStudent(name) => format!("Editing student: {}", name),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(query) => format!("🔍 Results for '{}'", query),
            Message::NoSearchResults(query) => format!("No students match '{}'", query),
            Message::EmptySearchQuery => "Type something to search".to_string(),

            // === FORM MESSAGES ===
            Message::SelectFormAction => "What would you like to do?".to_string(),
            Message::SelectStudentToEdit => "Select a student to edit".to_string(),
            Message::SelectStudentToDelete => "Select a student to delete".to_string(),
            Message::ConfirmDeleteStudent(id, name) => format!("Delete student #{} ({})?", id, name),
            Message::FormCleared => "Form cleared".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === FILE SYSTEM MESSAGES ===
            Message::DataStoragePathError => "Failed to resolve application data directory".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Name".to_string(),
            Message::PromptAge => "Age (optional)".to_string(),
            Message::PromptGrade => "Grade (optional)".to_string(),
            Message::PromptPhone => "Phone (optional)".to_string(),
            Message::PromptAddress => "Address (optional)".to_string(),
            Message::PromptDob => "Date of birth, DD/MM/YYYY (optional)".to_string(),
            Message::PromptSearchQuery => "Search query".to_string(),
        };
        write!(f, "{}", text)
    }
}
