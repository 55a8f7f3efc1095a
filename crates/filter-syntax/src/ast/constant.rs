use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values as produced by the expression-language front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
    Null,
    Bool(bool),
    Int64(i64),
    Uint64(u64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Null => write!(f, "null"),
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::Int64(i) => write!(f, "{i}"),
            Constant::Uint64(u) => write!(f, "{u}u"),
            Constant::Double(d) => write!(f, "{d}"),
            Constant::String(s) => write!(f, "\"{s}\""),
            Constant::Bytes(b) => write!(f, "b\"{}\"", String::from_utf8_lossy(b)),
        }
    }
}
