//! Load balancer command handlers

use crate::api::load_balancers::CreateLoadBalancerRequest;
use crate::api::Transport;
use crate::cli::{CommandContext, LoadBalancersCmd};
use crate::error::Result;
use crate::output::{self, LoadBalancers};
use crate::ui::confirm_delete;

pub async fn run(
    transport: &Transport,
    cmd: &LoadBalancersCmd,
    ctx: &CommandContext,
) -> Result<()> {
    match cmd {
        LoadBalancersCmd::List => {
            let lbs = transport.list_load_balancers(None).await?;
            output::print(&LoadBalancers(lbs), &ctx.display)
        }
        LoadBalancersCmd::Get { id } => {
            let lb = transport.get_load_balancer(id).await?;
            output::print(&LoadBalancers(vec![lb]), &ctx.display)
        }
        LoadBalancersCmd::Create {
            name,
            region,
            forwarding_rules,
            algorithm,
            server_ids,
        } => {
            let req = CreateLoadBalancerRequest {
                name: name.clone(),
                region: region.clone(),
                forwarding_rules: forwarding_rules.clone(),
                algorithm: algorithm.clone(),
                health_check: None,
                server_ids: (!server_ids.is_empty()).then(|| server_ids.clone()),
            };
            let lb = transport.create_load_balancer(&req).await?;
            output::print(&LoadBalancers(vec![lb]), &ctx.display)
        }
        LoadBalancersCmd::Delete { id } => {
            confirm_delete(&format!("load balancer {}", id), ctx.force)?;
            transport.delete_load_balancer(id).await?;
            eprintln!("Deleted load balancer {}", id);
            Ok(())
        }
    }
}
