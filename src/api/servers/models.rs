//! Server data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Region;

/// A compute instance
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub memory: u32,
    pub vcpus: u32,
    pub disk: u32,
    pub status: String,
    pub region: Region,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Base image a server was created from
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Image {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub distribution: Option<String>,
}

/// Network attachments, grouped by address family
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
}

/// One IPv4 attachment
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Server {
    /// First public IPv4 address, or the empty string
    pub fn public_ipv4(&self) -> &str {
        self.networks
            .v4
            .iter()
            .find(|n| n.kind == "public")
            .map(|n| n.ip_address.as_str())
            .unwrap_or("")
    }

    /// Image name, or the empty string when unknown
    pub fn image_name(&self) -> &str {
        self.image
            .as_ref()
            .and_then(|i| i.name.as_deref())
            .unwrap_or("")
    }
}

/// Body for server creation; unset fields are omitted on the wire
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateServerRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
