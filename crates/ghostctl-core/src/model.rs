//! Record types produced by the table parser.
//!
//! Records are created fresh per parse call and are read-only afterwards;
//! nothing here is persisted.

/// Menu label of the synthetic "let the server pick the city" option.
pub const BEST_LABEL: &str = "*Best*";

/// A country the VPN client can connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Two-letter country code, e.g. `US`
    pub code: String,
    /// Human-readable country name
    pub name: String,
}

impl Country {
    /// Build a country from a parsed table row.
    ///
    /// Missing fields default to empty strings; field presence is not
    /// guaranteed when the caller parsed with the wrong column count.
    pub fn from_row(row: &TableRow) -> Self {
        Self {
            code: row.get("code").unwrap_or_default().to_string(),
            name: row.get("name").unwrap_or_default().to_string(),
        }
    }
}

/// A city (server location) within a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// City name, the identity of the record within its country
    pub name: String,
    /// Server instance identifier
    pub instance: String,
    /// Load percentage as reported by the client
    pub load: String,
}

impl City {
    /// Build a city from a parsed table row.
    pub fn from_row(row: &TableRow) -> Self {
        Self {
            name: row.get("name").unwrap_or_default().to_string(),
            instance: row.get("instance").unwrap_or_default().to_string(),
            load: row.get("load").unwrap_or_default().to_string(),
        }
    }

    /// The synthetic "*Best*" entry shown first in city menus.
    ///
    /// Never produced by the parser; only injected when building a menu.
    pub fn best() -> Self {
        Self {
            name: BEST_LABEL.to_string(),
            instance: String::new(),
            load: String::new(),
        }
    }

    /// Whether this entry is the synthetic "*Best*" option rather than a
    /// real city.
    pub fn is_best(&self) -> bool {
        self.name == BEST_LABEL
    }
}

/// One parsed table row: an ordered mapping from cleaned header name to
/// cell value, preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    fields: Vec<(String, String)>,
}

impl TableRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A duplicate name overwrites the previous value
    /// (last write wins), matching the wrapped client's reference
    /// behavior for colliding headers.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}
