use crate::{
    db::students::Students,
    libs::{messages::Message, student::StudentForm, validation},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Student name
    #[arg(required = true)]
    name: String,
    /// Age in years
    #[arg(short, long)]
    age: Option<String>,
    /// Grade or class
    #[arg(short, long)]
    grade: Option<String>,
    /// Contact phone, digits only
    #[arg(short, long)]
    phone: Option<String>,
    /// Home address
    #[arg(long)]
    address: Option<String>,
    /// Date of birth as DD/MM/YYYY
    #[arg(short, long)]
    dob: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let form = StudentForm::new(
        &args.name,
        args.age.as_deref().unwrap_or(""),
        args.grade.as_deref().unwrap_or(""),
        args.phone.as_deref().unwrap_or(""),
        args.address.as_deref().unwrap_or(""),
        args.dob.as_deref().unwrap_or(""),
    );

    // Client-side check of the shared rules; the data layer re-checks them
    validation::validate_fields(&form)?;

    let id = Students::new()?.insert(&form)?;
    msg_success!(Message::StudentAdded(id));
    Ok(())
}
