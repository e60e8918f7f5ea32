//! Domain and record command handlers

use crate::api::domains::CreateRecordRequest;
use crate::api::Transport;
use crate::cli::{CommandContext, DomainsCmd, RecordArgs, RecordsCmd};
use crate::error::Result;
use crate::output::{self, DomainRecords, Domains};
use crate::ui::confirm_delete;

pub async fn run(transport: &Transport, cmd: &DomainsCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        DomainsCmd::List => {
            let domains = transport.list_domains(None).await?;
            output::print(&Domains(domains), &ctx.display)
        }
        DomainsCmd::Get { name } => {
            let domain = transport.get_domain(name).await?;
            output::print(&Domains(vec![domain]), &ctx.display)
        }
        DomainsCmd::Create { name, ip_address } => {
            let domain = transport.create_domain(name, ip_address.as_deref()).await?;
            output::print(&Domains(vec![domain]), &ctx.display)
        }
        DomainsCmd::Delete { name } => {
            confirm_delete(&format!("domain {} and all of its records", name), ctx.force)?;
            transport.delete_domain(name).await?;
            eprintln!("Deleted domain {}", name);
            Ok(())
        }
        DomainsCmd::Records { domain, cmd } => run_records(transport, domain, cmd, ctx).await,
    }
}

async fn run_records(
    transport: &Transport,
    domain: &str,
    cmd: &RecordsCmd,
    ctx: &CommandContext,
) -> Result<()> {
    match cmd {
        RecordsCmd::List => {
            let records = transport.list_records(domain, None).await?;
            output::print(&DomainRecords(records), &ctx.display)
        }
        RecordsCmd::Create(args) => {
            let record = transport.create_record(domain, &to_request(args)).await?;
            output::print(&DomainRecords(vec![record]), &ctx.display)
        }
        RecordsCmd::Update { id, args } => {
            let record = transport
                .update_record(domain, *id, &to_request(args))
                .await?;
            output::print(&DomainRecords(vec![record]), &ctx.display)
        }
        RecordsCmd::Delete { id } => {
            confirm_delete(&format!("record {} of domain {}", id, domain), ctx.force)?;
            transport.delete_record(domain, *id).await?;
            eprintln!("Deleted record {}", id);
            Ok(())
        }
    }
}

fn to_request(args: &RecordArgs) -> CreateRecordRequest {
    CreateRecordRequest {
        record_type: args.record_type.clone(),
        name: args.name.clone(),
        data: args.data.clone(),
        priority: args.priority,
        port: args.port,
        ttl: args.ttl,
        weight: args.weight,
    }
}
