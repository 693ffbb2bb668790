use thiserror::Error;

/// Error type that captures failures around the suggestion engine.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown suggestion: {0}")]
    UnknownSuggestion(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type MappingResult<T> = Result<T, MappingError>;
