//! Account and balance table projections

use std::collections::HashMap;
use std::io::Write;

use crate::api::{Account, Balance};
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// The authenticated account, ready for rendering
pub struct AccountDisplay(pub Account);

impl Displayable for AccountDisplay {
    fn cols(&self) -> Vec<&'static str> {
        vec!["UUID", "Email", "Verified", "Status", "ServerLimit", "VolumeLimit", "Team"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("UUID", "UUID"),
            ("Email", "Email"),
            ("Verified", "Email Verified"),
            ("Status", "Status"),
            ("ServerLimit", "Server Limit"),
            ("VolumeLimit", "Volume Limit"),
            ("Team", "Team"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        let a = &self.0;
        vec![HashMap::from([
            ("UUID", Cell::from(a.uuid.clone())),
            ("Email", Cell::from(a.email.clone())),
            ("Verified", Cell::from(a.email_verified)),
            ("Status", Cell::from(a.status.clone())),
            ("ServerLimit", Cell::from(a.server_limit)),
            ("VolumeLimit", Cell::from(a.volume_limit)),
            (
                "Team",
                Cell::from(a.team.as_ref().map(|t| t.name.clone()).unwrap_or_default()),
            ),
        ])]
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}

/// Billing balance, ready for rendering
pub struct BalanceDisplay(pub Balance);

impl Displayable for BalanceDisplay {
    fn cols(&self) -> Vec<&'static str> {
        vec!["Balance", "MonthToDateUsage", "MonthToDateBalance", "GeneratedAt"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("Balance", "Account Balance"),
            ("MonthToDateUsage", "Month-to-Date Usage"),
            ("MonthToDateBalance", "Month-to-Date Balance"),
            ("GeneratedAt", "Generated At"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        let b = &self.0;
        vec![HashMap::from([
            ("Balance", Cell::from(b.account_balance.clone())),
            ("MonthToDateUsage", Cell::from(b.month_to_date_usage.clone())),
            (
                "MonthToDateBalance",
                Cell::from(b.month_to_date_balance.clone()),
            ),
            (
                "GeneratedAt",
                Cell::from(b.generated_at.map(|t| t.to_rfc3339()).unwrap_or_default()),
            ),
        ])]
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}
