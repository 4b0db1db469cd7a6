//! Include / forward sets
//!
//! `includes` and `forwards` are disjoint after every insertion. Inserting
//! an include removes the forward entry; inserting a forward for something
//! already included does nothing. Promotion only goes forward → include.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What kind of generated artifact a dependency refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    Class,
    /// Enums are value types and have no out-of-line implementation
    Enum,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DependencyKind::Class,
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DependencyKind::Enum,
        }
    }

    /// Whether the dependency has generated out-of-line code of its own
    pub fn has_impl(&self) -> bool {
        self.kind == DependencyKind::Class
    }
}

/// Which generated artifact the set is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyContext {
    /// The class declaration: forward declarations preferred
    Declaration,
    /// The out-of-line implementation: everything included
    Implementation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    includes: BTreeSet<Dependency>,
    forwards: BTreeSet<Dependency>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_forward(&mut self, dep: Dependency) {
        if !self.includes.contains(&dep) {
            self.forwards.insert(dep);
        }
    }

    pub fn insert_include(&mut self, dep: Dependency) {
        self.forwards.remove(&dep);
        self.includes.insert(dep);
    }

    pub fn insert(&mut self, dep: Dependency, include_required: bool) {
        if include_required {
            self.insert_include(dep);
        } else {
            self.insert_forward(dep);
        }
    }

    pub fn includes(&self) -> impl Iterator<Item = &Dependency> {
        self.includes.iter()
    }

    pub fn forwards(&self) -> impl Iterator<Item = &Dependency> {
        self.forwards.iter()
    }

    pub fn is_included(&self, name: &str) -> bool {
        self.includes.iter().any(|d| d.name == name)
    }

    pub fn is_forwarded(&self, name: &str) -> bool {
        self.forwards.iter().any(|d| d.name == name)
    }

    pub fn include_names(&self) -> Vec<&str> {
        self.includes.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn forward_names(&self) -> Vec<&str> {
        self.forwards.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.includes.len() + self.forwards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.forwards.is_empty()
    }
}
