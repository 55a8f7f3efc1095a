use crate::ast::expr::{Expr, ExprId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Bool,
    Int64,
    Uint64,
    Double,
    String,
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellKnownType {
    Any,
    Timestamp,
    Duration,
}

/// Declared type of an expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Primitive(PrimitiveKind),
    /// Fully-qualified message name; may name a registered enum.
    Message(String),
    WellKnown(WellKnownType),
    ListOf(Box<Type>),
}

impl Type {
    pub fn bool() -> Self {
        Type::Primitive(PrimitiveKind::Bool)
    }

    pub fn string() -> Self {
        Type::Primitive(PrimitiveKind::String)
    }

    pub fn int64() -> Self {
        Type::Primitive(PrimitiveKind::Int64)
    }

    pub fn timestamp() -> Self {
        Type::WellKnown(WellKnownType::Timestamp)
    }

    pub fn message(full_name: impl Into<String>) -> Self {
        Type::Message(full_name.into())
    }

    pub fn list_of(elem: Type) -> Self {
        Type::ListOf(Box::new(elem))
    }

    /// Message name for message types, `""` otherwise.
    pub fn message_type(&self) -> &str {
        match self {
            Type::Message(name) => name,
            _ => "",
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Type::WellKnown(WellKnownType::Timestamp))
    }

    /// True for `repeated <primitive>` fields.
    pub fn is_repeated_primitive(&self) -> bool {
        matches!(self, Type::ListOf(elem) if matches!(**elem, Type::Primitive(_)))
    }
}

/// Side table from node id to its declared type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMap(HashMap<ExprId, Type>);

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ExprId, ty: Type) -> Option<Type> {
        self.0.insert(id, ty)
    }

    pub fn get(&self, id: ExprId) -> Option<&Type> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ExprId, Type)> for TypeMap {
    fn from_iter<I: IntoIterator<Item = (ExprId, Type)>>(iter: I) -> Self {
        TypeMap(iter.into_iter().collect())
    }
}

/// A type-checked expression: the tree plus its type table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedExpr {
    pub expr: Expr,
    #[serde(default)]
    pub type_map: TypeMap,
}

impl CheckedExpr {
    pub fn new(expr: Expr, type_map: TypeMap) -> Self {
        CheckedExpr { expr, type_map }
    }
}

/// Parsed `filter` request parameter. An empty filter has no checked expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub checked_expr: Option<CheckedExpr>,
}

impl Filter {
    pub fn new(checked_expr: CheckedExpr) -> Self {
        Filter {
            checked_expr: Some(checked_expr),
        }
    }

    pub fn empty() -> Self {
        Filter::default()
    }

    pub fn is_empty(&self) -> bool {
        self.checked_expr.is_none()
    }
}
