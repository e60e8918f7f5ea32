//! Volume data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Region;

/// A block storage volume
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Volume {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub size_gigabytes: u64,
    pub description: Option<String>,
    #[serde(default)]
    pub server_ids: Vec<u64>,
    pub filesystem_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Volume {
    /// Attached server ids as a comma-joined string for tabular output
    pub fn attachments(&self) -> String {
        self.server_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Body for volume creation; unset fields are omitted on the wire
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateVolumeRequest {
    pub name: String,
    pub region: String,
    pub size_gigabytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesystem_type: Option<String>,
}
