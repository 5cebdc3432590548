pub mod delete;
pub mod end;
pub mod export;
pub mod history;
pub mod init;
pub mod report;
pub mod sites;
pub mod start;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start a job at the current location")]
    Start(start::StartArgs),
    #[command(about = "End the active job and compute travel totals")]
    End(end::EndArgs),
    #[command(about = "Show the active job")]
    Status,
    #[command(about = "List jobs with totals for a period")]
    History(history::HistoryArgs),
    #[command(about = "Delete a job")]
    Delete(delete::DeleteArgs),
    #[command(about = "List known sites or register a new one")]
    Sites(sites::SitesArgs),
    #[command(about = "Preview a timesheet for a date range")]
    Report(report::ReportArgs),
    #[command(about = "Export a timesheet to a spreadsheet file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::End(args) => end::cmd(args).await,
            Commands::Status => status::cmd().await,
            Commands::History(args) => history::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Sites(args) => sites::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
