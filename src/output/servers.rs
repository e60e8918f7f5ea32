//! Server table projection

use std::collections::HashMap;
use std::io::Write;

use crate::api::Server;
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of servers ready for rendering
pub struct Servers(pub Vec<Server>);

impl Displayable for Servers {
    fn cols(&self) -> Vec<&'static str> {
        vec![
            "ID", "Name", "PublicIPv4", "Memory", "VCPUs", "Disk", "Region", "Image", "Status",
            "Tags",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("PublicIPv4", "Public IPv4"),
            ("Memory", "Memory"),
            ("VCPUs", "VCPUs"),
            ("Disk", "Disk"),
            ("Region", "Region"),
            ("Image", "Image"),
            ("Status", "Status"),
            ("Tags", "Tags"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|s| {
                HashMap::from([
                    ("ID", Cell::from(s.id)),
                    ("Name", Cell::from(s.name.clone())),
                    ("PublicIPv4", Cell::from(s.public_ipv4())),
                    ("Memory", Cell::from(s.memory)),
                    ("VCPUs", Cell::from(s.vcpus)),
                    ("Disk", Cell::from(s.disk)),
                    ("Region", Cell::from(s.region.slug())),
                    ("Image", Cell::from(s.image_name())),
                    ("Status", Cell::from(s.status.clone())),
                    ("Tags", Cell::from(s.tags.join(","))),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}
