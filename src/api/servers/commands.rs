//! Server command handlers

use log::debug;

use crate::api::servers::CreateServerRequest;
use crate::api::Transport;
use crate::cli::{CommandContext, OutputFormat, ServersCmd};
use crate::error::Result;
use crate::output::{self, Actions, Servers};
use crate::ui::{confirm_delete, create_spinner, finish_spinner};

pub async fn run(transport: &Transport, cmd: &ServersCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        ServersCmd::List { tag } => {
            let servers = transport.list_servers(tag.as_deref(), None).await?;
            output::print(&Servers(servers), &ctx.display)
        }
        ServersCmd::Get { id } => {
            let server = transport.get_server(*id).await?;
            output::print(&Servers(vec![server]), &ctx.display)
        }
        ServersCmd::Create {
            name,
            region,
            size,
            image,
            ssh_keys,
            backups,
            tags,
        } => {
            let req = CreateServerRequest {
                name: name.clone(),
                region: region.clone(),
                size: size.clone(),
                image: image.clone(),
                ssh_keys: (!ssh_keys.is_empty()).then(|| ssh_keys.clone()),
                backups: (*backups).then_some(true),
                tags: (!tags.is_empty()).then(|| tags.clone()),
            };
            let server = transport.create_server(&req).await?;
            debug!("Created server {} ({})", server.name, server.id);
            output::print(&Servers(vec![server]), &ctx.display)
        }
        ServersCmd::Delete { id } => {
            confirm_delete(&format!("server {}", id), ctx.force)?;
            transport.delete_server(*id).await?;
            eprintln!("Deleted server {}", id);
            Ok(())
        }
        ServersCmd::Reboot { id, wait } => {
            trigger(transport, *id, "reboot", *wait, ctx).await
        }
        ServersCmd::PowerOff { id, wait } => {
            trigger(transport, *id, "power_off", *wait, ctx).await
        }
        ServersCmd::PowerOn { id, wait } => {
            trigger(transport, *id, "power_on", *wait, ctx).await
        }
    }
}

/// Kick off a server action, optionally blocking until it settles
async fn trigger(
    transport: &Transport,
    id: u64,
    action_type: &str,
    wait: bool,
    ctx: &CommandContext,
) -> Result<()> {
    let (action, monitor) = transport.server_action(id, action_type).await?;
    let action = if wait {
        let quiet = ctx.display.format == OutputFormat::Json;
        let spinner = create_spinner(
            &format!("Waiting for {} on server {}...", action_type, id),
            quiet,
        );
        let result = transport
            .wait_action(action.id, monitor.as_deref(), ctx.poll_interval)
            .await;
        finish_spinner(spinner);
        result?
    } else {
        action
    };
    output::print(&Actions(vec![action]), &ctx.display)
}
