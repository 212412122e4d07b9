use crate::{
    db::students::Students,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let students = Students::new()?.fetch_all()?;

    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    msg_print!(Message::StudentListHeader, true);
    View::students(&students)?;
    Ok(())
}
