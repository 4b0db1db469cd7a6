//! Typed declaration annotations
//!
//! The front end maps every recognised annotation attribute onto one of
//! these kinds; unrecognised attributes never reach the core.

use serde::{Deserialize, Serialize};

/// Annotation kinds attached to types, functions and parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Annotation {
    /// Function allocates a new instance of its class
    Constructor,
    /// Function takes part in an overload group
    Overload,
    /// Parameter consumes a reference
    Take,
    /// Parameter is explicitly borrowed
    Keep,
    /// Return value (or out parameter) produces a new reference
    Give,
    /// Function returns a tri-state boolean
    ReturnsBool,
    /// Function is static regardless of its receiver
    Static,
    /// Type specializes the named class
    Subclass(String),
    /// Object is mutated in place instead of producing a new value
    InPlace,
}

/// Ordered annotation list of a single declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, annotation: Annotation) -> Self {
        self.0.push(annotation);
        self
    }

    pub fn has(&self, annotation: &Annotation) -> bool {
        self.0.contains(annotation)
    }

    /// Declared superclasses in declaration order, duplicates dropped
    pub fn superclasses(&self) -> Vec<String> {
        let mut supers: Vec<String> = Vec::new();
        for annotation in &self.0 {
            if let Annotation::Subclass(name) = annotation {
                if !supers.contains(name) {
                    supers.push(name.clone());
                }
            }
        }
        supers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Annotation>> for Annotations {
    fn from(annotations: Vec<Annotation>) -> Self {
        Self(annotations)
    }
}
