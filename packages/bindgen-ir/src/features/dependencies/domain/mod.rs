mod dependency_set;

pub use dependency_set::{Dependency, DependencyContext, DependencyKind, DependencySet};
