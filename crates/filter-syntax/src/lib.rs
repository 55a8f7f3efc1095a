//! Checked filter expressions as handed over by an AIP-160 style front end:
//! the expression tree, its per-node type table and the enum types the
//! filter may reference.

pub mod ast;
pub mod builder;
pub mod case;
pub mod declarations;
pub mod error;
pub mod registry;
pub mod types;

pub use ast::{
    constant::Constant,
    expr::{Call, Expr, ExprId, ExprKind, Ident, Select},
    function::Function,
};
pub use builder::ExprBuilder;
pub use declarations::Declarations;
pub use error::{Result, SyntaxError};
pub use registry::{EnumDescriptor, EnumLookup, EnumRegistry, EnumValue};
pub use types::{CheckedExpr, Filter, PrimitiveKind, Type, TypeMap, WellKnownType};
