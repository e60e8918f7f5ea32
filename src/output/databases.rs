//! Database cluster table projection

use std::collections::HashMap;
use std::io::Write;

use crate::api::Database;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of database clusters ready for rendering
pub struct Databases(pub Vec<Database>);

impl Displayable for Databases {
    fn cols(&self) -> Vec<&'static str> {
        vec!["ID", "Name", "Engine", "Status", "Region", "Size", "Nodes", "Host"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("Engine", "Engine"),
            ("Status", "Status"),
            ("Region", "Region"),
            ("Size", "Size"),
            ("Nodes", "Nodes"),
            ("Host", "Host"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|db| {
                HashMap::from([
                    ("ID", Cell::from(db.id.clone())),
                    ("Name", Cell::from(db.name.clone())),
                    ("Engine", Cell::from(db.engine_label())),
                    ("Status", Cell::from(db.status.clone())),
                    ("Region", Cell::from(db.region.clone())),
                    ("Size", Cell::from(db.size.clone().unwrap_or_default())),
                    ("Nodes", Cell::from(db.num_nodes)),
                    (
                        "Host",
                        Cell::from(
                            db.connection
                                .as_ref()
                                .map(|c| c.host.clone())
                                .unwrap_or_default(),
                        ),
                    ),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}
