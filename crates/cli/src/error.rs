use planner::PlanError;
use thiserror::Error;
use transpiler::TranspileError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter file: {0}")]
    FilterFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the filter file as JSON: {0}")]
    FilterDeserialize(#[from] serde_json::Error),

    #[error("Failed to transpile the filter: {0}")]
    Transpile(#[from] TranspileError),

    #[error("Failed to plan the record query: {0}")]
    Plan(#[from] PlanError),

    #[error("Failed to build the demo filter: {0}")]
    Declaration(#[from] filter_syntax::SyntaxError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Identifier `{0}` does not occur in the filter")]
    IdentNotFound(String),
}
