//! Delete a job by id.
//!
//! Works on jobs in either state; deleting the active job returns the
//! lifecycle to idle. Asks for confirmation unless `--yes` is passed.

use crate::libs::{config::Config, messages::Message, store::Store, tracker::Tracker};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the job to delete
    #[arg(required = true)]
    id: i64,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDeleteJob(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let config = Config::read()?;
    let store = Store::open(&config).await?;
    let mut tracker = Tracker::new(store).await?;

    if tracker.delete(args.id).await? == 0 {
        msg_error!(Message::JobNotFound(args.id));
        return Ok(());
    }

    msg_success!(Message::JobDeleted(args.id));
    Ok(())
}
