//! Volume table projection

use std::collections::HashMap;
use std::io::Write;

use crate::api::Volume;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of volumes ready for rendering
pub struct Volumes(pub Vec<Volume>);

impl Displayable for Volumes {
    fn cols(&self) -> Vec<&'static str> {
        vec!["ID", "Name", "Size", "Region", "Filesystem", "AttachedTo"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("Size", "Size"),
            ("Region", "Region"),
            ("Filesystem", "Filesystem Type"),
            ("AttachedTo", "Attached To"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|v| {
                HashMap::from([
                    ("ID", Cell::from(v.id.clone())),
                    ("Name", Cell::from(v.name.clone())),
                    ("Size", Cell::from(format!("{} GiB", v.size_gigabytes))),
                    ("Region", Cell::from(v.region.slug())),
                    (
                        "Filesystem",
                        Cell::from(v.filesystem_type.clone().unwrap_or_default()),
                    ),
                    ("AttachedTo", Cell::from(v.attachments())),
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

    #[test]
    fn test_volume_projection() {
        let volume: Volume = serde_json::from_value(serde_json::json!({
            "id": "vol-1",
            "name": "data-01",
            "region": {"slug": "fra1"},
            "size_gigabytes": 100,
            "description": null,
            "server_ids": [42, 43],
            "filesystem_type": "ext4",
            "created_at": null
        }))
        .unwrap();
        let rows = Volumes(vec![volume]).rows();
        assert_eq!(rows[0]["Size"], Cell::from("100 GiB"));
        assert_eq!(rows[0]["AttachedTo"], Cell::from("42,43"));
    }

    #[test]
    fn test_empty_list_serializes_to_bracket_pair() {
        let mut out = Vec::new();
        Volumes(Vec::new()).write_json(&mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
