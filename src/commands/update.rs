use crate::{
    db::students::Students,
    libs::{messages::Message, student::StudentForm, validation},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the student record to update
    #[arg(required = true)]
    id: i64,
}

/// Edits a record in place: every field is prompted with the stored value
/// pre-filled, so unchanged fields are kept as they are.
pub fn cmd(args: UpdateArgs) -> Result<()> {
    let mut students = Students::new()?;

    let student = match students.get_by_id(args.id)? {
        Some(s) => s,
        None => {
            msg_error!(Message::StudentNotFound(args.id.to_string()));
            return Ok(());
        }
    };

    msg_print!(Message::EditingStudent(student.name.clone()), true);

    let defaults = StudentForm::from_student(&student);
    let theme = ColorfulTheme::default();
    let form = StudentForm::new(
        &prompt_field(&theme, Message::PromptName, &defaults.name)?,
        &prompt_field(&theme, Message::PromptAge, &defaults.age)?,
        &prompt_field(&theme, Message::PromptGrade, &defaults.grade)?,
        &prompt_field(&theme, Message::PromptPhone, &defaults.phone)?,
        &prompt_field(&theme, Message::PromptAddress, &defaults.address)?,
        &prompt_field(&theme, Message::PromptDob, &defaults.dob)?,
    );

    validation::validate_fields(&form)?;

    let affected = students.update(args.id, &form)?;
    if affected == 0 {
        msg_error!(Message::StudentNotFound(args.id.to_string()));
        return Ok(());
    }

    msg_success!(Message::StudentUpdated(args.id));
    Ok(())
}

fn prompt_field(theme: &ColorfulTheme, prompt: Message, initial: &str) -> Result<String> {
    let value = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
