//! Tab-aligned text table writer

use std::io::Write;

use tabwriter::TabWriter;

use crate::error::Result;

use super::{resolve_columns, Displayable};

/// Write a displayable as a tab-separated table, aligned by elastic tab
/// stops (min-width 0, tab stop 4).
///
/// A column key missing from a row renders as an empty cell; some
/// projections intentionally list columns their rows never key.
pub fn write_table(
    item: &dyn Displayable,
    columns: Option<&str>,
    no_header: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let cols = resolve_columns(item, columns)?;
    let labels = item.col_map();

    let mut tw = TabWriter::new(out).minwidth(0).padding(4);

    if !no_header {
        let header: Vec<&str> = cols.iter().map(|key| labels[key]).collect();
        writeln!(tw, "{}", header.join("\t"))?;
    }

    for row in item.rows() {
        let cells: Vec<String> = cols
            .iter()
            .map(|key| row.get(key).map(|c| c.to_string()).unwrap_or_default())
            .collect();
        writeln!(tw, "{}", cells.join("\t"))?;
    }

    tw.flush()?;
    Ok(())
}
