//! Action command handlers

use std::time::Duration;

use log::debug;

use crate::api::Transport;
use crate::cli::{ActionsCmd, CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{self, Actions};
use crate::ui::{create_spinner, finish_spinner};

pub async fn run(transport: &Transport, cmd: &ActionsCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        ActionsCmd::List => {
            let actions = transport.list_actions(None).await?;
            output::print(&Actions(actions), &ctx.display)
        }
        ActionsCmd::Get { id } => {
            let action = transport.get_action(*id).await?;
            output::print(&Actions(vec![action]), &ctx.display)
        }
        ActionsCmd::Wait { id, interval } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or(ctx.poll_interval);
            debug!("Waiting for action {} with interval {:?}", id, interval);
            let quiet = ctx.display.format == OutputFormat::Json;
            let spinner = create_spinner(&format!("Waiting for action {}...", id), quiet);
            let result = transport.wait_action(*id, None, interval).await;
            finish_spinner(spinner);
            // An errored action is still a result worth showing; the
            // status column carries the outcome.
            output::print(&Actions(vec![result?]), &ctx.display)
        }
    }
}
