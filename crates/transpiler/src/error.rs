use filter_syntax::ExprId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UnknownType,
    Arity,
    Unsupported,
    MalformedConst,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranspileError {
    #[error("unknown type of ident expr {0}")]
    UnknownIdentType(ExprId),

    #[error("unknown type of call expr {0}")]
    UnknownCallType(ExprId),

    #[error("unexpected number of arguments to `{function}`: {count}")]
    Arity { function: String, count: usize },

    #[error("unsupported expr: {0}")]
    UnsupportedExpr(String),

    #[error("unsupported function call: {0}")]
    UnsupportedFunction(String),

    #[error("unsupported const expr: {0}")]
    UnsupportedConst(String),

    #[error("does not support SELECT expression for now")]
    UnsupportedSelect,

    #[error("does not support NOT expression for now")]
    UnsupportedNot,

    #[error("does not support OR logical op at the moment")]
    UnsupportedOr,

    /// Operand shapes of `:` that have no Flux rendering yet.
    #[error("TODO: add support for {0}")]
    UnsupportedHas(&'static str),

    #[error("expected constant string arg to {0}")]
    MalformedTimestamp(String),
}

impl TranspileError {
    /// Every category is permanent: the filter is rejected as a whole.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranspileError::UnknownIdentType(_) | TranspileError::UnknownCallType(_) => {
                ErrorCategory::UnknownType
            }
            TranspileError::Arity { .. } => ErrorCategory::Arity,
            TranspileError::MalformedTimestamp(_) => ErrorCategory::MalformedConst,
            TranspileError::UnsupportedExpr(_)
            | TranspileError::UnsupportedFunction(_)
            | TranspileError::UnsupportedConst(_)
            | TranspileError::UnsupportedSelect
            | TranspileError::UnsupportedNot
            | TranspileError::UnsupportedOr
            | TranspileError::UnsupportedHas(_) => ErrorCategory::Unsupported,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranspileError>;
