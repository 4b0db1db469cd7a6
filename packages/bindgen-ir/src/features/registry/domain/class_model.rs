//! Class model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::InterfaceConfig;
use crate::features::classification::FunctionSignature;
use crate::shared::models::{DeclId, TypeDeclaration};

/// One object-oriented class synthesized from a C record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    pub id: DeclId,
    /// Functions allocating a new instance, ordered by C name
    pub constructors: Vec<FunctionSignature>,
    /// Normalized method name → overload set, each set ordered by C name
    pub methods: BTreeMap<String, Vec<FunctionSignature>>,
    /// Declared superclasses in declaration order
    pub superclasses: Vec<String>,
    pub is_context_type: bool,
    pub is_in_place: bool,
}

impl ClassModel {
    pub fn from_declaration(decl: &TypeDeclaration, config: &InterfaceConfig) -> Self {
        Self {
            name: decl.name.clone(),
            id: decl.id,
            constructors: Vec::new(),
            methods: BTreeMap::new(),
            superclasses: decl.superclasses(),
            is_context_type: decl.name == config.context_class,
            is_in_place: decl.is_in_place(),
        }
    }

    /// File a classified function as constructor or method
    pub(crate) fn insert(&mut self, signature: FunctionSignature) {
        if signature.is_constructor {
            let at = self
                .constructors
                .partition_point(|c| c.name < signature.name);
            self.constructors.insert(at, signature);
        } else {
            let overloads = self
                .methods
                .entry(signature.method_name.clone())
                .or_default();
            let at = overloads.partition_point(|m| m.name < signature.name);
            overloads.insert(at, signature);
        }
    }

    pub fn overloads(&self, method: &str) -> &[FunctionSignature] {
        self.methods.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every non-constructor function of the class
    pub fn all_methods(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.methods.values().flatten()
    }

    /// Constructors followed by methods
    pub fn all_functions(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.constructors.iter().chain(self.all_methods())
    }

    pub fn has_function(&self, c_name: &str) -> bool {
        self.all_functions().any(|f| f.name == c_name)
    }

    /// Method names whose overload set has more than one member
    pub fn overloaded_methods(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .filter(|(_, set)| set.len() > 1)
            .map(|(name, _)| name.as_str())
    }

    /// The library exposes a reference-copy operation
    pub fn is_copyable(&self) -> bool {
        self.methods.contains_key("copy")
    }

    /// The library exposes a release operation
    pub fn has_destructor(&self) -> bool {
        self.methods.contains_key("free")
    }

    pub fn is_subclass(&self) -> bool {
        !self.superclasses.is_empty()
    }

    /// Class name without the library prefix
    pub fn unqualified_name<'a>(&'a self, config: &InterfaceConfig) -> &'a str {
        config.strip_library_prefix(&self.name)
    }
}
