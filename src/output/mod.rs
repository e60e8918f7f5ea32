//! Output projection layer
//!
//! Every response shape implements [`Displayable`]: an ordered column
//! list, a key-to-header map, row projections into [`Cell`] values, and a
//! structured serializer. The render engine then services all of them
//! without knowing the underlying domain types.

mod account;
mod actions;
mod databases;
mod domains;
mod kubernetes;
mod load_balancers;
mod servers;
mod text;
mod volumes;

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub use account::{AccountDisplay, BalanceDisplay};
pub use actions::Actions;
pub use databases::Databases;
pub use domains::{DomainRecords, Domains};
pub use kubernetes::KubernetesClusters;
pub use load_balancers::LoadBalancers;
pub use servers::Servers;
pub use volumes::Volumes;

/// One table cell
///
/// The text writer switches on the variant; the structured writer never
/// sees cells, it serializes the wrapped domain value directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Nested record flattened to a `field:value,field:value` join
    Nested(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Str(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Nested(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Str(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Str(s)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<u64> for Cell {
    fn from(i: u64) -> Self {
        Cell::Int(i as i64)
    }
}

impl From<u32> for Cell {
    fn from(i: u32) -> Self {
        Cell::Int(i64::from(i))
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Float(x)
    }
}

/// The four-operation projection contract
pub trait Displayable {
    /// Ordered column keys
    fn cols(&self) -> Vec<&'static str>;

    /// Column key to human-readable header label; covers every key in
    /// [`cols`](Self::cols)
    fn col_map(&self) -> HashMap<&'static str, &'static str>;

    /// Row projections, keyed by column key
    fn rows(&self) -> Vec<HashMap<&'static str, Cell>>;

    /// Serialize the underlying domain value (not the projected rows)
    fn write_json(&self, out: &mut dyn Write) -> Result<()>;
}

/// Rendering options carried from the CLI layer
#[derive(Debug, Clone)]
pub struct DisplayOpts {
    pub format: OutputFormat,
    /// Comma-separated column override (whitespace-tolerant)
    pub columns: Option<String>,
    pub no_header: bool,
}

impl Default for DisplayOpts {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            columns: None,
            no_header: false,
        }
    }
}

/// Render a displayable to a sink in the selected format
pub fn render(item: &dyn Displayable, opts: &DisplayOpts, out: &mut dyn Write) -> Result<()> {
    match opts.format {
        OutputFormat::Json => {
            item.write_json(out)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Text => text::write_table(item, opts.columns.as_deref(), opts.no_header, out),
    }
}

/// Render to stdout
pub fn print(item: &dyn Displayable, opts: &DisplayOpts) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    render(item, opts, &mut lock)
}

/// Resolve the effective column list, validating any override against the
/// displayable's column map. Unknown keys are fatal.
pub(crate) fn resolve_columns(
    item: &dyn Displayable,
    columns: Option<&str>,
) -> Result<Vec<&'static str>> {
    let known = item.col_map();
    match columns {
        None => Ok(item.cols()),
        Some(spec) => {
            let mut resolved = Vec::new();
            for requested in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                match known.keys().find(|k| **k == requested) {
                    Some(key) => resolved.push(*key),
                    None => {
                        return Err(Error::Render(format!("unknown column: {}", requested)))
                    }
                }
            }
            Ok(resolved)
        }
    }
}

/// Serialize any domain value with two-space indentation
pub(crate) fn write_json_value<T: Serialize>(value: &T, out: &mut dyn Write) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Render(format!("JSON encoding failed: {}", e)))?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
