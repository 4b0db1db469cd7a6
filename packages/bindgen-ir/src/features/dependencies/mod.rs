//! Dependency Resolver
//!
//! Per class, which other classes (and enums) the generated declaration
//! and the generated implementation need fully defined, and which a
//! forward declaration is enough for.

pub mod domain;
pub mod infrastructure;

pub use domain::{Dependency, DependencyContext, DependencyKind, DependencySet};
pub use infrastructure::DependencyResolver;
