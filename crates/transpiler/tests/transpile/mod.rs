//! Transpiler tests
//!
//! These tests build checked filters by hand, the way the filter front end
//! would hand them over, and assert on the exact Flux text emitted.

mod comparison;
mod errors;
mod helpers;
