//! Error types for record reduction.

use thiserror::Error;

/// Errors that can occur while reducing a record set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// The marker budget must allow at least one record.
    #[error("max count must be at least 1, got {max_count}")]
    InvalidMaxCount { max_count: usize },

    /// Returned by [`reduce_non_empty`](crate::reduce_non_empty) for an empty input.
    #[error("cannot reduce an empty record set")]
    EmptyInput,
}

/// Result type for reduction operations.
pub type Result<T> = std::result::Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ReduceError::InvalidMaxCount { max_count: 0 }.to_string(),
            "max count must be at least 1, got 0"
        );
        assert_eq!(
            ReduceError::EmptyInput.to_string(),
            "cannot reduce an empty record set"
        );
    }
}
