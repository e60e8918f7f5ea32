//! Database cluster data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed database cluster
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Database {
    pub id: String,
    pub name: String,
    pub engine: String,
    pub version: Option<String>,
    pub status: String,
    pub region: String,
    pub size: Option<String>,
    pub num_nodes: u32,
    pub connection: Option<Connection>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Database {
    /// `engine vVERSION` label, or bare engine when version is unknown
    pub fn engine_label(&self) -> String {
        match &self.version {
            Some(v) => format!("{} v{}", self.engine, v),
            None => self.engine.clone(),
        }
    }
}

/// Connection endpoint details
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub user: Option<String>,
}

/// Body for database cluster creation
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateDatabaseRequest {
    pub name: String,
    pub engine: String,
    pub region: String,
    pub size: String,
    pub num_nodes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
