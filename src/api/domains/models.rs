//! Domain and record data models

use serde::{Deserialize, Serialize};

/// A DNS zone
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Domain {
    pub name: String,
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_file: Option<String>,
}

/// One record inside a zone
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    pub priority: Option<u16>,
    pub port: Option<u16>,
    pub ttl: Option<u32>,
    pub weight: Option<u16>,
}

/// Body for record creation and updates; unset fields are omitted so a
/// PUT leaves them untouched server-side
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateRecordRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
}
