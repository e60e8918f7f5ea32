//! Volume command handlers

use crate::api::volumes::CreateVolumeRequest;
use crate::api::Transport;
use crate::cli::{CommandContext, VolumesCmd};
use crate::error::Result;
use crate::output::{self, Volumes};
use crate::ui::confirm_delete;

pub async fn run(transport: &Transport, cmd: &VolumesCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        VolumesCmd::List => {
            let volumes = transport.list_volumes(None).await?;
            output::print(&Volumes(volumes), &ctx.display)
        }
        VolumesCmd::Get { id } => {
            let volume = transport.get_volume(id).await?;
            output::print(&Volumes(vec![volume]), &ctx.display)
        }
        VolumesCmd::Create {
            name,
            region,
            size,
            description,
            filesystem_type,
        } => {
            let req = CreateVolumeRequest {
                name: name.clone(),
                region: region.clone(),
                size_gigabytes: *size,
                description: description.clone(),
                filesystem_type: filesystem_type.clone(),
            };
            let volume = transport.create_volume(&req).await?;
            output::print(&Volumes(vec![volume]), &ctx.display)
        }
        VolumesCmd::Delete { id } => {
            confirm_delete(&format!("volume {}", id), ctx.force)?;
            transport.delete_volume(id).await?;
            eprintln!("Deleted volume {}", id);
            Ok(())
        }
    }
}
