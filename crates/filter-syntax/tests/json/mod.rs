//! JSON fixtures
//!
//! These tests verify that checked filters produced outside this workspace
//! deserialize into the typed tree and type table.
