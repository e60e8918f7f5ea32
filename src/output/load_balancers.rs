//! Load balancer table projection
//!
//! Forwarding rules and health checks appear as nested cells: each record
//! flattened to a `field:value` join, records separated by a space.

use std::collections::HashMap;
use std::io::Write;

use crate::api::LoadBalancer;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of load balancers ready for rendering
pub struct LoadBalancers(pub Vec<LoadBalancer>);

impl Displayable for LoadBalancers {
    fn cols(&self) -> Vec<&'static str> {
        vec![
            "ID",
            "IP",
            "Name",
            "Status",
            "Algorithm",
            "Region",
            "ForwardingRules",
            "HealthCheck",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("IP", "IP"),
            ("Name", "Name"),
            ("Status", "Status"),
            ("Algorithm", "Algorithm"),
            ("Region", "Region"),
            ("ForwardingRules", "Forwarding Rules"),
            ("HealthCheck", "Health Check"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|lb| {
                let rules = lb
                    .forwarding_rules
                    .iter()
                    .map(|r| r.summary())
                    .collect::<Vec<_>>()
                    .join(" ");
                let check = lb
                    .health_check
                    .as_ref()
                    .map(|c| c.summary())
                    .unwrap_or_default();
                HashMap::from([
                    ("ID", Cell::from(lb.id.clone())),
                    ("IP", Cell::from(lb.ip.clone().unwrap_or_default())),
                    ("Name", Cell::from(lb.name.clone())),
                    ("Status", Cell::from(lb.status.clone())),
                    (
                        "Algorithm",
                        Cell::from(lb.algorithm.clone().unwrap_or_default()),
                    ),
                    (
                        "Region",
                        Cell::from(
                            lb.region.as_ref().map(|r| r.slug().to_string()).unwrap_or_default(),
                        ),
                    ),
                    ("ForwardingRules", Cell::Nested(rules)),
                    ("HealthCheck", Cell::Nested(check)),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}
