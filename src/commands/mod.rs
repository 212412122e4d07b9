pub mod add;
pub mod delete;
pub mod form;
pub mod init;
pub mod list;
pub mod search;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a student record")]
    Add(add::AddArgs),
    #[command(about = "Update a student record")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a student record")]
    Delete(delete::DeleteArgs),
    #[command(about = "List all student records")]
    List,
    #[command(about = "Search student records by id, age or field content")]
    Search(search::SearchArgs),
    #[command(about = "Interactive record-entry form")]
    Form,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List => list::cmd(),
            Commands::Search(args) => search::cmd(args),
            Commands::Form => form::cmd(),
        }
    }
}
