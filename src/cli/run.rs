//! Command dispatch
//!
//! Resolves credentials and per-command settings, builds the transport,
//! and routes to the matching resource handler.

use std::time::Duration;

use log::debug;

use crate::api::{self, resolve_api_url, resolve_token, Transport};
use crate::cli::{Cli, Command, CommandContext, OutputFormat};
use crate::config::defaults;
use crate::error::{Error, Result};
use crate::output::DisplayOpts;
use crate::settings::{resolve_value, Settings};

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let token = resolve_token(cli.access_token.as_deref(), &settings)?;
    let api_url = resolve_api_url(cli.api_url.as_deref(), &settings);
    debug!("Using API at {}", api_url);
    let transport = Transport::new(token, api_url);

    let ctx = build_context(&cli, &settings)?;
    let result = match &cli.command {
        Command::Account { cmd } => api::account::commands::run(&transport, cmd, &ctx).await,
        Command::Actions { cmd } => api::actions::commands::run(&transport, cmd, &ctx).await,
        Command::Servers { cmd } => api::servers::commands::run(&transport, cmd, &ctx).await,
        Command::Domains { cmd } => api::domains::commands::run(&transport, cmd, &ctx).await,
        Command::Volumes { cmd } => api::volumes::commands::run(&transport, cmd, &ctx).await,
        Command::LoadBalancers { cmd } => {
            api::load_balancers::commands::run(&transport, cmd, &ctx).await
        }
        Command::Kubernetes { cmd } => api::kubernetes::commands::run(&transport, cmd, &ctx).await,
        Command::Databases { cmd } => api::databases::commands::run(&transport, cmd, &ctx).await,
    };

    if let Some(rate) = transport.rate() {
        debug!(
            "Rate budget: {}/{} remaining, resets at {}",
            rate.remaining, rate.limit, rate.reset
        );
    }
    result
}

/// Resolve display and polling options for one invocation; flags beat
/// environment beats config file beats built-in defaults.
fn build_context(cli: &Cli, settings: &Settings) -> Result<CommandContext> {
    let path = cli.command_path();

    let output_flag = cli.output.map(|o| o.to_string());
    let format = resolve_value(
        output_flag.as_deref(),
        Some("NIMBUS_OUTPUT"),
        settings,
        &path,
        "output",
        Some("text"),
    )
    .unwrap_or_else(|| "text".to_string())
    .parse::<OutputFormat>()
    .map_err(Error::Config)?;

    let columns = resolve_value(cli.format.as_deref(), None, settings, &path, "format", None);

    let no_header = cli.no_header
        || resolve_value(None, None, settings, &path, "no-header", None)
            .map(|v| v == "true")
            .unwrap_or(false);

    let poll_interval = resolve_value(None, None, settings, &path, "poll-interval", None)
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(defaults::ACTION_POLL_SECS));

    Ok(CommandContext {
        display: DisplayOpts {
            format,
            columns,
            no_header,
        },
        force: cli.force,
        poll_interval,
    })
}
