//! Header and cell normalization.

const BOM: char = '\u{feff}';

/// Normalizes a header: strips a BOM, trims, and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(BOM).trim();
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a data cell: strips a BOM and surrounding whitespace.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches(BOM).trim().to_string()
}

/// True when every cell of the row is blank.
pub fn is_blank_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|cell| cell.as_ref().trim().is_empty())
}
