use thiserror::Error;
use transpiler::TranspileError;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to transpile filter: {0}")]
    Transpile(#[from] TranspileError),

    #[error("Invalid page token: {0}")]
    InvalidPageToken(String),

    #[error("Invalid range start `{value}`: {reason}")]
    InvalidRangeStart { value: String, reason: String },

    #[error("Failed to read query config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse query config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
