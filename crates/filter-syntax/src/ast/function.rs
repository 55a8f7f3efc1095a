use serde::{Deserialize, Serialize};
use std::fmt;

/// Functions of the standard filter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    Has,
    Equals,
    NotEquals,
    LessThan,
    LessEquals,
    GreaterThan,
    GreaterEquals,
    And,
    Or,
    Not,
    Timestamp,
}

impl Function {
    pub const ALL: [Function; 11] = [
        Function::Has,
        Function::Equals,
        Function::NotEquals,
        Function::LessThan,
        Function::LessEquals,
        Function::GreaterThan,
        Function::GreaterEquals,
        Function::And,
        Function::Or,
        Function::Not,
        Function::Timestamp,
    ];

    /// Surface name used in call nodes.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Has => ":",
            Function::Equals => "=",
            Function::NotEquals => "!=",
            Function::LessThan => "<",
            Function::LessEquals => "<=",
            Function::GreaterThan => ">",
            Function::GreaterEquals => ">=",
            Function::And => "AND",
            Function::Or => "OR",
            Function::Not => "NOT",
            Function::Timestamp => "timestamp",
        }
    }

    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Number of arguments a call of this function must carry.
    pub fn arity(&self) -> usize {
        match self {
            Function::Not | Function::Timestamp => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
