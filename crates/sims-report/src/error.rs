//! Error types for report queries.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("unknown sort column '{0}'")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
