pub mod constant;
pub mod expr;
pub mod function;
