#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Decoded upload before validation: a header row and rows of cell text.
///
/// Every row has exactly `headers.len()` cells. Cells may carry surrounding
/// whitespace; the validator trims them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_normalizes_width() {
        let mut table = RawTable::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(vec!["1".to_string()]);
        table.push_row(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["1", "2"]);
        assert_eq!(table.column_index("B"), Some(1));
    }
}
