use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sampling strategy '{0}' (expected random, cluster or grid)")]
    UnknownSamplingStrategy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
