use thiserror::Error;

/// rolltrack error types
#[derive(Error, Debug)]
pub enum RolltrackError {
    /// Failed to parse JSON input
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Terminal rendering failed
    #[error("render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for RolltrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for rolltrack
pub type Result<T> = std::result::Result<T, RolltrackError>;
