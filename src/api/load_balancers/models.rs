//! Load balancer data models
//!
//! Forwarding rules and health checks are nested records; their tabular
//! form is an explicit `field:value` join, one joiner per record type.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::Region;
use crate::error::Error;

/// A load balancer
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoadBalancer {
    pub id: String,
    pub name: String,
    pub ip: Option<String>,
    pub status: String,
    pub algorithm: Option<String>,
    pub region: Option<Region>,
    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRule>,
    pub health_check: Option<HealthCheck>,
}

/// One port-forwarding rule
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ForwardingRule {
    pub entry_protocol: String,
    pub entry_port: u16,
    pub target_protocol: String,
    pub target_port: u16,
    #[serde(default)]
    pub tls_passthrough: bool,
}

impl ForwardingRule {
    /// Flatten to `field:value,field:value` for the rules column
    pub fn summary(&self) -> String {
        format!(
            "entry_protocol:{},entry_port:{},target_protocol:{},target_port:{},tls_passthrough:{}",
            self.entry_protocol,
            self.entry_port,
            self.target_protocol,
            self.target_port,
            self.tls_passthrough
        )
    }
}

impl FromStr for ForwardingRule {
    type Err = Error;

    /// Parse the CLI shape `entry_protocol:http,entry_port:80,...`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rule = ForwardingRule {
            entry_protocol: String::new(),
            entry_port: 0,
            target_protocol: String::new(),
            target_port: 0,
            tls_passthrough: false,
        };
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (field, value) = pair.split_once(':').ok_or_else(|| {
                Error::Validation(format!("malformed forwarding rule field '{}'", pair))
            })?;
            let bad_value = || {
                Error::Validation(format!(
                    "invalid value '{}' for forwarding rule field '{}'",
                    value, field
                ))
            };
            match field.trim() {
                "entry_protocol" => rule.entry_protocol = value.trim().to_string(),
                "entry_port" => rule.entry_port = value.trim().parse().map_err(|_| bad_value())?,
                "target_protocol" => rule.target_protocol = value.trim().to_string(),
                "target_port" => rule.target_port = value.trim().parse().map_err(|_| bad_value())?,
                "tls_passthrough" => {
                    rule.tls_passthrough = value.trim().parse().map_err(|_| bad_value())?
                }
                other => {
                    return Err(Error::Validation(format!(
                        "unknown forwarding rule field '{}'",
                        other
                    )))
                }
            }
        }
        if rule.entry_protocol.is_empty() || rule.target_protocol.is_empty() {
            return Err(Error::Validation(
                "forwarding rule needs entry_protocol and target_protocol".to_string(),
            ));
        }
        Ok(rule)
    }
}

/// Health check configuration
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub protocol: String,
    pub port: u16,
    pub path: Option<String>,
    pub check_interval_seconds: Option<u32>,
    pub response_timeout_seconds: Option<u32>,
    pub healthy_threshold: Option<u32>,
    pub unhealthy_threshold: Option<u32>,
}

impl HealthCheck {
    /// Flatten to `field:value,field:value` for the health-check column
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("protocol:{}", self.protocol),
            format!("port:{}", self.port),
        ];
        if let Some(ref path) = self.path {
            parts.push(format!("path:{}", path));
        }
        if let Some(v) = self.check_interval_seconds {
            parts.push(format!("check_interval_seconds:{}", v));
        }
        if let Some(v) = self.response_timeout_seconds {
            parts.push(format!("response_timeout_seconds:{}", v));
        }
        if let Some(v) = self.healthy_threshold {
            parts.push(format!("healthy_threshold:{}", v));
        }
        if let Some(v) = self.unhealthy_threshold {
            parts.push(format!("unhealthy_threshold:{}", v));
        }
        parts.join(",")
    }
}

/// Body for load balancer creation
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateLoadBalancerRequest {
    pub name: String,
    pub region: String,
    pub forwarding_rules: Vec<ForwardingRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_ids: Option<Vec<u64>>,
}
