//! Immutable registry snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClassModel, EnumModel, TypeCatalog};

/// Classes and enums of one library, frozen after the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    catalog: TypeCatalog,
    classes: BTreeMap<String, ClassModel>,
    enums: BTreeMap<String, EnumModel>,
}

impl Registry {
    pub(crate) fn new(
        catalog: TypeCatalog,
        classes: BTreeMap<String, ClassModel>,
        enums: BTreeMap<String, EnumModel>,
    ) -> Self {
        Self {
            catalog,
            classes,
            enums,
        }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.classes.get(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn enum_(&self, name: &str) -> Option<&EnumModel> {
        self.enums.get(name)
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumModel> {
        self.enums.values()
    }

    /// Total number of functions filed across all classes
    pub fn function_count(&self) -> usize {
        self.classes
            .values()
            .map(|c| c.all_functions().count())
            .sum()
    }

    /// Class a C function was filed under
    pub fn owner_of(&self, c_name: &str) -> Option<&ClassModel> {
        self.classes.values().find(|c| c.has_function(c_name))
    }
}
