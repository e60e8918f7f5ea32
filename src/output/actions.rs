//! Action table projection

use std::collections::HashMap;
use std::io::Write;

use crate::api::Action;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of actions ready for rendering
pub struct Actions(pub Vec<Action>);

impl Displayable for Actions {
    fn cols(&self) -> Vec<&'static str> {
        vec![
            "ID",
            "Status",
            "Type",
            "StartedAt",
            "CompletedAt",
            "ResourceID",
            "ResourceType",
            "Region",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Status", "Status"),
            ("Type", "Type"),
            ("StartedAt", "Started At"),
            ("CompletedAt", "Completed At"),
            ("ResourceID", "Resource ID"),
            ("ResourceType", "Resource Type"),
            ("Region", "Region"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|a| {
                HashMap::from([
                    ("ID", Cell::from(a.id)),
                    ("Status", Cell::from(a.status.to_string())),
                    ("Type", Cell::from(a.action_type.clone())),
                    (
                        "StartedAt",
                        Cell::from(a.started_at.map(|t| t.to_rfc3339()).unwrap_or_default()),
                    ),
                    (
                        "CompletedAt",
                        Cell::from(a.completed_at.map(|t| t.to_rfc3339()).unwrap_or_default()),
                    ),
                    (
                        "ResourceID",
                        Cell::from(
                            a.resource_id
                                .map(|id| id.to_string())
                                .unwrap_or_default(),
                        ),
                    ),
                    (
                        "ResourceType",
                        Cell::from(a.resource_type.clone().unwrap_or_default()),
                    ),
                    ("Region", Cell::from(a.region.clone().unwrap_or_default())),
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
    use crate::api::ActionStatus;

    fn sample() -> Action {
        serde_json::from_value(serde_json::json!({
            "id": 99,
            "status": "completed",
            "type": "reboot",
            "started_at": "2024-01-01T00:00:00Z",
            "completed_at": "2024-01-01T00:00:42Z",
            "resource_id": 42,
            "resource_type": "server",
            "region": "fra1"
        }))
        .unwrap()
    }

    #[test]
    fn test_status_and_timestamps_projection() {
        let display = Actions(vec![sample()]);
        let rows = display.rows();
        assert_eq!(rows[0]["Status"], Cell::from("completed"));
        assert_eq!(rows[0]["StartedAt"], Cell::from("2024-01-01T00:00:00+00:00"));
        assert_eq!(rows[0]["ResourceID"], Cell::from("42"));
    }

    #[test]
    fn test_unset_fields_render_empty() {
        let action: Action =
            serde_json::from_value(serde_json::json!({"id": 1, "status": "in-progress", "type": "create"}))
                .unwrap();
        assert_eq!(action.status, ActionStatus::InProgress);
        let rows = Actions(vec![action]).rows();
        assert_eq!(rows[0]["CompletedAt"], Cell::from(""));
        assert_eq!(rows[0]["ResourceType"], Cell::from(""));
    }

    #[test]
    fn test_rows_cover_every_column() {
        let display = Actions(vec![sample()]);
        let cols = display.cols();
        for row in display.rows() {
            for col in &cols {
                assert!(row.contains_key(col), "missing column {}", col);
            }
        }
    }
}
