use crate::ast::constant::Constant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable node identifier assigned by the checker; keys the type table.
pub type ExprId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: ExprId, kind: ExprKind) -> Self {
        Expr { id, kind }
    }

    /// Name of the identifier this node refers to, or `""` for any other node.
    pub fn ident_name(&self) -> &str {
        match &self.kind {
            ExprKind::Ident(ident) => &ident.name,
            _ => "",
        }
    }

    /// Arguments of a call node; empty for every other node.
    pub fn call_args(&self) -> &[Expr] {
        match &self.kind {
            ExprKind::Call(call) => &call.args,
            _ => &[],
        }
    }

    /// String payload of a constant node, or `""` when there is none.
    pub fn const_string(&self) -> &str {
        match &self.kind {
            ExprKind::Const(Constant::String(s)) => s,
            _ => "",
        }
    }

    pub fn as_const(&self) -> Option<&Constant> {
        match &self.kind {
            ExprKind::Const(c) => Some(c),
            _ => None,
        }
    }
}

/// Expression node variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprKind {
    Const(Constant),
    Ident(Ident),
    Select(Select),
    Call(Call),
    /// List literal, e.g. `["a", "b"]`.
    List(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident { name: name.into() }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Member access: `operand.field`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub operand: Box<Expr>,
    pub field: String,
}

/// Function or operator application. `function` holds the surface name the
/// front end emitted (`=`, `AND`, `:`, `timestamp`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub function: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(function: impl Into<String>, args: Vec<Expr>) -> Self {
        Call {
            function: function.into(),
            args,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Const(c) => write!(f, "{c}"),
            ExprKind::Ident(ident) => write!(f, "{ident}"),
            ExprKind::Select(select) => write!(f, "{}.{}", select.operand, select.field),
            ExprKind::Call(call) => {
                let args = call
                    .args
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", call.function, args)
            }
            ExprKind::List(items) => {
                let items = items
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{items}]")
            }
        }
    }
}
