//! Table text parsing.
//!
//! The wrapped VPN client prints its country and city listings as
//! pipe-and-dash bordered ASCII tables:
//!
//! ```text
//! +-----+--------------+--------------+
//! | No. | Country Name | Country Code |
//! +-----+--------------+--------------+
//! |  1  |    Austria   |      AT      |
//! +-----+--------------+--------------+
//! ```
//!
//! Parsing happens in two steps: derive a [`TableLayout`] once per table
//! shape, then map data cells positionally. Splitting the whole text on
//! `|` merges every border line into a single junk cell, so each row
//! group carries exactly one empty border column alongside its data.

use crate::error::{Error, Result};
use crate::model::TableRow;
use tracing::trace;

/// Characters the client uses to draw table borders and fill.
const BORDER_CHARS: [char; 3] = ['-', '+', '.'];

/// Ordered mapping from physical column index to field name, derived
/// once per table shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    total_columns: usize,
    fields: Vec<(usize, String)>,
}

impl TableLayout {
    /// Derive the layout from the cleaned header cells.
    ///
    /// Headers whose cleaned name is empty are pure border columns and
    /// contribute no field.
    pub fn derive(header_cells: &[String]) -> Self {
        let fields = header_cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (index, normalize_header(cell)))
            .filter(|(_, name)| !name.is_empty())
            .collect();

        Self {
            total_columns: header_cells.len(),
            fields,
        }
    }

    /// Number of physical columns per row group
    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    /// Field names in column order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, name)| name.as_str())
    }

    /// Map one row group of cells to a record.
    fn row(&self, cells: &[String]) -> TableRow {
        let mut row = TableRow::new();
        for (index, name) in &self.fields {
            if let Some(value) = cells.get(*index) {
                row.insert(name.clone(), value.clone());
            }
        }
        row
    }
}

/// Parse a bordered table into records, one per data row, in source order.
///
/// `data_columns` counts the semantic columns; each physical row group
/// carries two more cells: the merged border cell and the numeric index
/// column that typed records ignore. A table with zero data rows yields
/// an empty vector. A data cell count that cannot fill whole rows fails
/// with [`Error::MalformedTable`] instead of mis-placing fields.
pub fn parse(table_text: &str, data_columns: usize) -> Result<Vec<TableRow>> {
    let total_columns = data_columns + 2;

    let cells: Vec<String> = table_text.split('|').map(clean_cell).collect();
    if cells.len() <= total_columns {
        return Ok(Vec::new());
    }

    let layout = TableLayout::derive(&cells[..total_columns]);
    trace!(
        columns = total_columns,
        fields = ?layout.field_names().collect::<Vec<_>>(),
        "derived table layout"
    );

    // The final cell comes from the closing border, never from data.
    let data = &cells[total_columns..cells.len() - 1];
    if data.len() % total_columns != 0 {
        return Err(Error::MalformedTable {
            expected_columns: total_columns,
            cell_count: data.len(),
        });
    }

    Ok(data
        .chunks(total_columns)
        .map(|chunk| layout.row(chunk))
        .collect())
}

/// Trim a raw cell and strip border fill characters.
fn clean_cell(cell: &str) -> String {
    cell.trim()
        .chars()
        .filter(|c| !BORDER_CHARS.contains(c))
        .collect()
}

/// Normalize a header cell to its field name.
///
/// Lowercases, strips whitespace and border fill, removes the literal
/// word "country" and renames "city" to "name", so both listings expose
/// the same canonical field names (`Country Code` becomes `code`, `City`
/// becomes `name`).
fn normalize_header(cell: &str) -> String {
    let stripped: String = cell
        .to_lowercase()
        .replace("country", "")
        .chars()
        .filter(|c| !c.is_whitespace() && !BORDER_CHARS.contains(c))
        .collect();
    stripped.replace("city", "name")
}
