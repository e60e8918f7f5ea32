//! Kubernetes cluster table projection

use std::collections::HashMap;
use std::io::Write;

use crate::api::KubernetesCluster;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of clusters ready for rendering
pub struct KubernetesClusters(pub Vec<KubernetesCluster>);

impl Displayable for KubernetesClusters {
    fn cols(&self) -> Vec<&'static str> {
        vec!["ID", "Name", "Region", "Version", "Status", "Nodes", "Endpoint"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("Region", "Region"),
            ("Version", "Version"),
            ("Status", "Status"),
            ("Nodes", "Node Count"),
            ("Endpoint", "Endpoint"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|c| {
                HashMap::from([
                    ("ID", Cell::from(c.id.clone())),
                    ("Name", Cell::from(c.name.clone())),
                    ("Region", Cell::from(c.region.clone())),
                    ("Version", Cell::from(c.version.clone())),
                    ("Status", Cell::from(c.state())),
                    ("Nodes", Cell::from(c.node_count())),
                    (
                        "Endpoint",
                        Cell::from(c.endpoint.clone().unwrap_or_default()),
                    ),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_projection() {
        let cluster: KubernetesCluster = serde_json::from_value(serde_json::json!({
            "id": "k8s-1",
            "name": "prod",
            "region": "fra1",
            "version": "1.29.1",
            "status": {"state": "running"},
            "endpoint": null,
            "node_pools": [
                {"id": "p1", "name": "workers", "size": "s-4vcpu-8gb", "count": 3},
                {"id": "p2", "name": "spot", "size": "s-2vcpu-4gb", "count": 2}
            ],
            "created_at": null
        }))
        .unwrap();
        let rows = KubernetesClusters(vec![cluster]).rows();
        assert_eq!(rows[0]["Nodes"], Cell::from(5u32));
        assert_eq!(rows[0]["Status"], Cell::from("running"));
        assert_eq!(rows[0]["Endpoint"], Cell::from(""));
    }
}
