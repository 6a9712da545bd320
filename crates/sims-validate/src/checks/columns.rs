//! Column presence checks.
//!
//! Resolves upload headers against the column catalogue, applies the `CIRY`
//! rename and decides the layout the record set is exported with.

use std::collections::{BTreeMap, HashMap, HashSet};

use sims_model::{CITY_TYPO, ColumnLayout, StationColumn, ValidationWarning, is_city_typo};
use tracing::debug;

use crate::util::CaseInsensitiveIndex;

/// Where each catalogued column lives in the upload.
#[derive(Debug, Clone)]
pub struct ColumnResolution {
    positions: BTreeMap<StationColumn, usize>,
    extras: Vec<(String, usize)>,
    layout: ColumnLayout,
    renamed: Option<ValidationWarning>,
}

impl ColumnResolution {
    pub fn position(&self, column: StationColumn) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    pub fn contains(&self, column: StationColumn) -> bool {
        self.positions.contains_key(&column)
    }

    /// Non-catalogue headers with their positions, in upload order.
    pub fn extras(&self) -> &[(String, usize)] {
        &self.extras
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn into_layout(self) -> ColumnLayout {
        self.layout
    }

    /// The `ColumnRenamed` warning, when the typo was accepted.
    pub fn renamed(&self) -> Option<&ValidationWarning> {
        self.renamed.as_ref()
    }

    /// Required columns not present, in catalogue order.
    pub fn missing_required(&self) -> Vec<StationColumn> {
        StationColumn::REQUIRED
            .into_iter()
            .filter(|column| !self.contains(*column))
            .collect()
    }

    /// Optional columns not present, in catalogue order.
    pub fn missing_optional(&self) -> Vec<StationColumn> {
        StationColumn::OPTIONAL
            .into_iter()
            .filter(|column| !self.contains(*column))
            .collect()
    }

    /// Trimmed cell text for a catalogued column, empty when the column is
    /// absent.
    pub fn text<'a>(&self, row: &'a [String], column: StationColumn) -> &'a str {
        self.position(column)
            .and_then(|idx| row.get(idx))
            .map_or("", |cell| cell.trim())
    }
}

/// Resolve upload headers against the catalogue.
pub fn resolve(headers: &[String]) -> ColumnResolution {
    let index = CaseInsensitiveIndex::from_headers(headers);
    let mut positions = BTreeMap::new();
    for column in StationColumn::ALL {
        if let Some(idx) = index.get(column.header()) {
            positions.insert(column, idx);
        }
    }

    let mut renamed = None;
    if !positions.contains_key(&StationColumn::City)
        && let Some(idx) = index.get(CITY_TYPO)
    {
        let from = headers[idx].clone();
        debug!(from = %from, to = "CITY", "accepting misspelled city column");
        positions.insert(StationColumn::City, idx);
        renamed = Some(ValidationWarning::ColumnRenamed {
            from,
            to: StationColumn::City.header().to_string(),
        });
    }

    let by_position: HashMap<usize, StationColumn> =
        positions.iter().map(|(column, idx)| (*idx, *column)).collect();
    let mut layout = Vec::with_capacity(headers.len());
    let mut extras = Vec::new();
    let mut seen_extras = HashSet::new();
    for (idx, header) in headers.iter().enumerate() {
        if let Some(column) = by_position.get(&idx) {
            layout.push(column.header().to_string());
            continue;
        }
        let duplicate_catalogued = StationColumn::from_header(header).is_some()
            || (renamed.is_some() && is_city_typo(header));
        if duplicate_catalogued || !seen_extras.insert(header.clone()) {
            debug!(header = %header, position = idx, "duplicate column ignored");
            continue;
        }
        layout.push(header.clone());
        extras.push((header.clone(), idx));
    }

    for column in StationColumn::OPTIONAL {
        if !positions.contains_key(&column) {
            debug!(column = %column, "optional column not present");
        }
    }

    ColumnResolution {
        positions,
        extras,
        layout: ColumnLayout::new(layout),
        renamed,
    }
}
