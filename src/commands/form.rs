//! Interactive record-entry form session.
//!
//! A prompt-driven loop standing in for a desktop entry form: an action menu
//! drives add, edit, delete, view, search and clear, the register table is
//! re-rendered after every successful mutation, and field prompts carry the
//! pending form values so the session behaves like a form with persistent
//! entry fields.
//!
//! The form has exactly two observable modes: empty/new-entry and
//! populated-from-selection. Selecting a row (the first step of Edit or
//! Delete) copies that record's displayed values into the fields; clearing
//! or a successful add/update/delete returns the form to the empty mode.
//! Errors are shown and leave the visible state untouched.

use crate::{
    db::students::Students,
    libs::{
        messages::Message,
        student::{Student, StudentForm},
        validation,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const ACTIONS: &[&str] = &["Add student", "Edit student", "Delete student", "View all", "Search", "Clear form", "Quit"];

pub fn cmd() -> Result<()> {
    let mut students = Students::new()?;

    // Pending entry-field values and search text; both survive a failed
    // action so the user can correct instead of retyping.
    let mut form = StudentForm::default();
    let mut search_text = String::new();

    refresh(&mut students)?;

    loop {
        let action = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectFormAction.to_string())
            .items(ACTIONS)
            .default(0)
            .interact()?;

        let outcome = match action {
            0 => handle_add(&mut students, &mut form),
            1 => handle_edit(&mut students, &mut form),
            2 => handle_delete(&mut students, &mut form),
            3 => refresh(&mut students),
            4 => handle_search(&mut students, &mut search_text),
            5 => {
                form = StudentForm::default();
                search_text.clear();
                msg_info!(Message::FormCleared);
                Ok(())
            }
            _ => break,
        };

        // Failed actions leave the register and the form values as they were
        if let Err(e) = outcome {
            msg_error!(e);
        }
    }

    Ok(())
}

fn handle_add(students: &mut Students, form: &mut StudentForm) -> Result<()> {
    let candidate = collect_form(form)?;
    *form = candidate.clone();

    validation::validate_fields(&candidate)?;

    let id = students.insert(&candidate)?;
    msg_success!(Message::StudentAdded(id));

    *form = StudentForm::default();
    refresh(students)
}

fn handle_edit(students: &mut Students, form: &mut StudentForm) -> Result<()> {
    let student = match select_student(students, Message::SelectStudentToEdit)? {
        Some(s) => s,
        None => return Ok(()),
    };

    // Row selection copies the displayed values into the entry fields
    *form = StudentForm::from_student(&student);
    msg_print!(Message::EditingStudent(student.name.clone()));

    let candidate = collect_form(form)?;
    *form = candidate.clone();

    validation::validate_fields(&candidate)?;

    let id = student.id.unwrap_or_default();
    let affected = students.update(id, &candidate)?;
    if affected == 0 {
        msg_error!(Message::StudentNotFound(id.to_string()));
        return Ok(());
    }

    msg_success!(Message::StudentUpdated(id));
    *form = StudentForm::default();
    refresh(students)
}

fn handle_delete(students: &mut Students, form: &mut StudentForm) -> Result<()> {
    let student = match select_student(students, Message::SelectStudentToDelete)? {
        Some(s) => s,
        None => return Ok(()),
    };
    let id = student.id.unwrap_or_default();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteStudent(id, student.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    students.delete(id)?;
    msg_success!(Message::StudentDeleted(id));

    *form = StudentForm::default();
    refresh(students)
}

fn handle_search(students: &mut Students, search_text: &mut String) -> Result<()> {
    let query: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearchQuery.to_string())
        .with_initial_text(search_text.as_str())
        .allow_empty(true)
        .interact_text()?;

    let query = query.trim().to_string();
    if query.is_empty() {
        msg_warning!(Message::EmptySearchQuery);
        return Ok(());
    }
    *search_text = query.clone();

    let results = students.search(&query)?;
    if results.is_empty() {
        msg_info!(Message::NoSearchResults(query));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(query), true);
    View::students(&results)
}

/// Re-fetches the full register and renders it; no incremental updates.
fn refresh(students: &mut Students) -> Result<()> {
    let all = students.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    msg_print!(Message::StudentListHeader, true);
    View::students(&all)
}

/// Offers the current rows for selection; `None` when the register is empty.
fn select_student(students: &mut Students, prompt: Message) -> Result<Option<Student>> {
    let all = students.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(None);
    }

    let labels: Vec<String> = all.iter().map(|s| format!("#{} {}", s.id.unwrap_or_default(), s.name)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(all.into_iter().nth(selection))
}

/// Prompts for each entry field with the pending values pre-filled and
/// whitespace trimmed, then returns the candidate record.
fn collect_form(current: &StudentForm) -> Result<StudentForm> {
    let theme = ColorfulTheme::default();
    Ok(StudentForm::new(
        &prompt_field(&theme, Message::PromptName, &current.name)?,
        &prompt_field(&theme, Message::PromptAge, &current.age)?,
        &prompt_field(&theme, Message::PromptGrade, &current.grade)?,
        &prompt_field(&theme, Message::PromptPhone, &current.phone)?,
        &prompt_field(&theme, Message::PromptAddress, &current.address)?,
        &prompt_field(&theme, Message::PromptDob, &current.dob)?,
    ))
}

fn prompt_field(theme: &ColorfulTheme, prompt: Message, initial: &str) -> Result<String> {
    let value = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
