//! Kubernetes cluster data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed Kubernetes cluster
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct KubernetesCluster {
    pub id: String,
    pub name: String,
    pub region: String,
    pub version: String,
    pub status: ClusterStatus,
    pub endpoint: Option<String>,
    #[serde(default)]
    pub node_pools: Vec<NodePool>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl KubernetesCluster {
    /// Total node count across all pools
    pub fn node_count(&self) -> u32 {
        self.node_pools.iter().map(|p| p.count).sum()
    }

    pub fn state(&self) -> &str {
        &self.status.state
    }
}

/// Cluster lifecycle state wrapper
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ClusterStatus {
    pub state: String,
}

/// A homogeneous group of worker nodes
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NodePool {
    pub id: String,
    pub name: String,
    pub size: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_deserialization() {
        let json = r#"{
            "id": "k8s-1",
            "name": "prod",
            "region": "fra1",
            "version": "1.29.1",
            "status": {"state": "running"},
            "endpoint": "https://k8s-1.nimbus.cloud",
            "node_pools": [
                {"id": "pool-1", "name": "workers", "size": "s-4vcpu-8gb", "count": 3},
                {"id": "pool-2", "name": "spot", "size": "s-2vcpu-4gb", "count": 2}
            ],
            "tags": ["prod"],
            "created_at": "2024-03-01T00:00:00Z"
        }"#;
        let cluster: KubernetesCluster = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.state(), "running");
        assert_eq!(cluster.node_count(), 5);
    }

    #[test]
    fn test_cluster_without_pools() {
        let json = r#"{
            "id": "k8s-2",
            "name": "empty",
            "region": "ams3",
            "version": "1.29.1",
            "status": {"state": "provisioning"},
            "endpoint": null,
            "created_at": null
        }"#;
        let cluster: KubernetesCluster = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.node_count(), 0);
        assert!(cluster.endpoint.is_none());
    }
}
