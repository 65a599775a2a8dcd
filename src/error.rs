/// Error types for the Batchflow dispatcher
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchflowError {
    #[error("Event error: {0}")]
    Event(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Spark submit error: {0}")]
    SparkSubmit(String),

    #[error("Glue job error: {0}")]
    Glue(String),

    #[error("Athena query error: {0}")]
    Athena(String),

    #[error("Alert error: {0}")]
    Alert(String),
}

impl BatchflowError {
    /// Determines if a failed run is worth retrying on the next trigger
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Event(_) => false,
            Self::Config(_) => false,
            Self::Storage(_) => true,
            Self::Manifest(_) => false,
            Self::SparkSubmit(_) => true,
            Self::Glue(_) => true,
            Self::Athena(_) => true,
            Self::Alert(_) => false,
        }
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for BatchflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Event(err.to_string())
    }
}

impl From<std::env::VarError> for BatchflowError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
