use crate::{
    db::students::Students,
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query text; an all-digit query also matches id and age exactly
    #[arg(required = true)]
    query: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let query = args.query.trim().to_string();
    if query.is_empty() {
        msg_warning!(Message::EmptySearchQuery);
        return Ok(());
    }

    let results = Students::new()?.search(&query)?;
    if results.is_empty() {
        msg_info!(Message::NoSearchResults(query));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(query), true);
    View::students(&results)?;
    Ok(())
}
