//! Registered type names
//!
//! The first thing built from the input: it lets attribution and shape
//! detection run before any class has been filled in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::features::classification::TypeLookup;
use crate::shared::models::DeclarationSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    classes: BTreeSet<String>,
    enums: BTreeSet<String>,
    context_class: String,
}

impl TypeCatalog {
    pub fn new(
        classes: impl IntoIterator<Item = String>,
        enums: impl IntoIterator<Item = String>,
        context_class: impl Into<String>,
    ) -> Self {
        Self {
            classes: classes.into_iter().collect(),
            enums: enums.into_iter().collect(),
            context_class: context_class.into(),
        }
    }

    pub fn from_declarations(decls: &DeclarationSet, context_class: &str) -> Self {
        Self::new(
            decls.types.iter().map(|t| t.name.clone()),
            decls.enums.iter().map(|e| e.name.clone()),
            context_class,
        )
    }

    /// Class names in lexicographic order
    pub fn class_names(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn enum_names(&self) -> &BTreeSet<String> {
        &self.enums
    }
}

impl TypeLookup for TypeCatalog {
    fn is_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    fn context_class(&self) -> &str {
        &self.context_class
    }
}
