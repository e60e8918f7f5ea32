//! Kubernetes command handlers

use std::io::Write;

use crate::api::Transport;
use crate::cli::{CommandContext, KubernetesCmd};
use crate::error::Result;
use crate::output::{self, KubernetesClusters};
use crate::ui::confirm_delete;

pub async fn run(transport: &Transport, cmd: &KubernetesCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        KubernetesCmd::List => {
            let clusters = transport.list_kubernetes_clusters(None).await?;
            output::print(&KubernetesClusters(clusters), &ctx.display)
        }
        KubernetesCmd::Get { id } => {
            let cluster = transport.get_kubernetes_cluster(id).await?;
            output::print(&KubernetesClusters(vec![cluster]), &ctx.display)
        }
        KubernetesCmd::Delete { id } => {
            confirm_delete(&format!("cluster {}", id), ctx.force)?;
            transport.delete_kubernetes_cluster(id).await?;
            eprintln!("Deleted cluster {}", id);
            Ok(())
        }
        KubernetesCmd::Kubeconfig { id } => {
            // Raw YAML bytes, written verbatim so the output pipes
            // straight into a kubeconfig file.
            let bytes = transport.kubeconfig(id).await?;
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&bytes)?;
            Ok(())
        }
    }
}
