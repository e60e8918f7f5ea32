//! Database command handlers

use crate::api::databases::CreateDatabaseRequest;
use crate::api::Transport;
use crate::cli::{CommandContext, DatabasesCmd};
use crate::error::Result;
use crate::output::{self, Databases};
use crate::ui::confirm_delete;

pub async fn run(transport: &Transport, cmd: &DatabasesCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        DatabasesCmd::List => {
            let databases = transport.list_databases(None).await?;
            output::print(&Databases(databases), &ctx.display)
        }
        DatabasesCmd::Get { id } => {
            let db = transport.get_database(id).await?;
            output::print(&Databases(vec![db]), &ctx.display)
        }
        DatabasesCmd::Create {
            name,
            engine,
            region,
            size,
            num_nodes,
            version,
        } => {
            let req = CreateDatabaseRequest {
                name: name.clone(),
                engine: engine.clone(),
                region: region.clone(),
                size: size.clone(),
                num_nodes: *num_nodes,
                version: version.clone(),
            };
            let db = transport.create_database(&req).await?;
            output::print(&Databases(vec![db]), &ctx.display)
        }
        DatabasesCmd::Delete { id } => {
            confirm_delete(&format!("database {}", id), ctx.force)?;
            transport.delete_database(id).await?;
            eprintln!("Deleted database {}", id);
            Ok(())
        }
    }
}
