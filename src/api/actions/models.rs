//! Action data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an action
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "errored")]
    Errored,
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionStatus::InProgress => write!(f, "in-progress"),
            ActionStatus::Completed => write!(f, "completed"),
            ActionStatus::Errored => write!(f, "errored"),
        }
    }
}

/// An asynchronous unit of work spawned by a mutating API call
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Action {
    pub id: u64,
    pub status: ActionStatus,
    #[serde(rename = "type")]
    pub action_type: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub resource_id: Option<u64>,
    pub resource_type: Option<String>,
    pub region: Option<String>,
}

impl Action {
    /// Whether the action has left the `in-progress` state
    pub fn is_terminal(&self) -> bool {
        self.status != ActionStatus::InProgress
    }
}
