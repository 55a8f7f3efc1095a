use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("identifier '{0}' is already declared")]
    DuplicateIdent(String),

    #[error("enum type '{0}' is already registered with different values")]
    ConflictingEnum(String),

    #[error("enum value '{value}' is declared by both '{first}' and '{second}'")]
    AmbiguousEnumValue {
        value: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
