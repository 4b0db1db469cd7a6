//! Common test utilities for bindgen-ir
//!
//! Shared declaration fixtures and builders for integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
