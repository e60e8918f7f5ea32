//! Account data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Account {
    pub uuid: String,
    pub email: String,
    pub status: String,
    pub server_limit: u32,
    pub volume_limit: u32,
    #[serde(default)]
    pub email_verified: bool,
    pub team: Option<Team>,
}

/// Team the account belongs to, when any
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub uuid: String,
    pub name: String,
}

/// Billing balance snapshot
///
/// Amounts arrive as decimal strings on the wire; they are kept verbatim
/// so no precision is lost in display or structured output.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Balance {
    pub account_balance: String,
    pub month_to_date_usage: String,
    pub month_to_date_balance: String,
    pub generated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialization() {
        let json = r#"{
            "uuid": "acc-1234",
            "email": "ops@example.com",
            "status": "active",
            "server_limit": 25,
            "volume_limit": 100,
            "email_verified": true,
            "team": {"uuid": "team-1", "name": "platform"}
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.email, "ops@example.com");
        assert_eq!(account.team.unwrap().name, "platform");
    }

    #[test]
    fn test_balance_amounts_stay_verbatim() {
        let json = r#"{
            "account_balance": "-12.50",
            "month_to_date_usage": "103.723",
            "month_to_date_balance": "91.223",
            "generated_at": "2024-03-01T00:00:00Z"
        }"#;
        let balance: Balance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.month_to_date_usage, "103.723");
        assert_eq!(balance.account_balance, "-12.50");
    }
}
