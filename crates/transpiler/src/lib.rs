//! Transpiles checked filter expressions into Flux pipeline fragments.

pub mod error;
pub mod flux;
pub mod rewrite;

pub use error::{ErrorCategory, Result, TranspileError};
pub use flux::{Transpiler, TypeHint, transpile};
pub use rewrite::{extract_const_value, hijack_const_value};
