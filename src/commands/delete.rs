use crate::{
    db::students::Students,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the student record to delete
    #[arg(required = true)]
    id: i64,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut students = Students::new()?;

    // Deleting a missing id is a no-op, not an error
    let student = match students.get_by_id(args.id)? {
        Some(s) => s,
        None => {
            msg_info!(Message::StudentNotFound(args.id.to_string()));
            return Ok(());
        }
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteStudent(args.id, student.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    students.delete(args.id)?;
    msg_success!(Message::StudentDeleted(args.id));
    Ok(())
}
