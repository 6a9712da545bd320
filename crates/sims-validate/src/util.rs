//! Utility types for validation.

use std::collections::HashMap;

/// Header positions keyed by uppercase name.
///
/// Upload headers are matched case-insensitively. When a header appears more
/// than once, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveIndex {
    inner: HashMap<String, usize>,
}

impl CaseInsensitiveIndex {
    /// Build an index from headers in upload order.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = HashMap::new();
        for (idx, header) in headers.into_iter().enumerate() {
            inner
                .entry(header.as_ref().trim().to_uppercase())
                .or_insert(idx);
        }
        Self { inner }
    }

    /// Check if the index contains a header (case-insensitive).
    pub fn contains(&self, header: impl AsRef<str>) -> bool {
        self.inner
            .contains_key(&header.as_ref().trim().to_uppercase())
    }

    /// Position of the first column with this header.
    pub fn get(&self, header: impl AsRef<str>) -> Option<usize> {
        self.inner
            .get(&header.as_ref().trim().to_uppercase())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case_and_keep_first_position() {
        let index = CaseInsensitiveIndex::from_headers(["City", "sid_lat", "CITY"]);
        assert!(index.contains("CITY"));
        assert!(index.contains("Sid_Lat"));
        assert!(!index.contains("SID_LONG"));
        assert_eq!(index.get("city"), Some(0));
        assert_eq!(index.len(), 2);
    }
}
