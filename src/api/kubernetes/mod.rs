//! Managed Kubernetes clusters

mod api;
pub mod commands;
mod models;

pub use models::{KubernetesCluster, NodePool};
