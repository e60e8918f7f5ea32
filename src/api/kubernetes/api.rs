//! Kubernetes API operations
//!
//! Kubeconfig download bypasses the JSON envelope: the endpoint returns a
//! raw YAML document, so it rides the raw-bytes request path.

use reqwest::Method;

use crate::api::transport::Transport;
use crate::error::{Error, Result};

use super::models::KubernetesCluster;

impl Transport {
    /// List all clusters
    pub async fn list_kubernetes_clusters(
        &self,
        per_page: Option<u32>,
    ) -> Result<Vec<KubernetesCluster>> {
        self.list_all("/kubernetes/clusters", "kubernetes_clusters", per_page)
            .await
    }

    /// Fetch one cluster by id
    pub async fn get_kubernetes_cluster(&self, id: &str) -> Result<KubernetesCluster> {
        if id.trim().is_empty() {
            return Err(Error::Validation("cluster id is required".to_string()));
        }
        self.get_item(&format!("/kubernetes/clusters/{}", id), "kubernetes_cluster")
            .await
    }

    /// Delete a cluster
    pub async fn delete_kubernetes_cluster(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::Validation("cluster id is required".to_string()));
        }
        self.delete_path(&format!("/kubernetes/clusters/{}", id))
            .await
    }

    /// Download a cluster's kubeconfig as raw bytes
    pub async fn kubeconfig(&self, id: &str) -> Result<Vec<u8>> {
        if id.trim().is_empty() {
            return Err(Error::Validation("cluster id is required".to_string()));
        }
        self.request_raw(
            Method::GET,
            &format!("/kubernetes/clusters/{}/kubeconfig", id),
        )
        .await
    }
}
