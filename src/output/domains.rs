//! Domain and record table projections

use std::collections::HashMap;
use std::io::Write;

use crate::api::{Domain, DomainRecord};
use crate::error::Result;

use super::{write_json_value, Cell, Displayable};

/// A page of domains ready for rendering
pub struct Domains(pub Vec<Domain>);

impl Displayable for Domains {
    fn cols(&self) -> Vec<&'static str> {
        vec!["Domain", "TTL"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([("Domain", "Domain"), ("TTL", "TTL")])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        self.0
            .iter()
            .map(|d| {
                HashMap::from([
                    ("Domain", Cell::from(d.name.clone())),
                    (
                        "TTL",
                        Cell::from(d.ttl.map(|t| t.to_string()).unwrap_or_default()),
                    ),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}

/// A page of DNS records ready for rendering
pub struct DomainRecords(pub Vec<DomainRecord>);

impl Displayable for DomainRecords {
    fn cols(&self) -> Vec<&'static str> {
        vec!["ID", "Type", "Name", "Data", "Priority", "Port", "TTL", "Weight"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Type", "Type"),
            ("Name", "Name"),
            ("Data", "Data"),
            ("Priority", "Priority"),
            ("Port", "Port"),
            ("TTL", "TTL"),
            ("Weight", "Weight"),
        ])
    }

    fn rows(&self) -> Vec<HashMap<&'static str, Cell>> {
        fn opt<T: ToString>(v: Option<T>) -> Cell {
            Cell::from(v.map(|x| x.to_string()).unwrap_or_default())
        }
        self.0
            .iter()
            .map(|r| {
                HashMap::from([
                    ("ID", Cell::from(r.id)),
                    ("Type", Cell::from(r.record_type.clone())),
                    ("Name", Cell::from(r.name.clone())),
                    ("Data", Cell::from(r.data.clone())),
                    ("Priority", opt(r.priority)),
                    ("Port", opt(r.port)),
                    ("TTL", opt(r.ttl)),
                    ("Weight", opt(r.weight)),
                ])
            })
            .collect()
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        write_json_value(&self.0, out)
    }
}
