//! Frozen model handed to emitters

use std::collections::BTreeMap;

use crate::config::InterfaceConfig;
use crate::features::dependencies::{DependencyContext, DependencySet};
use crate::features::naming;
use crate::features::registry::{ClassModel, EnumModel, PrintabilityIndex, Registry};

/// Dependency sets of one class, one per generated artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDependencies {
    pub declaration: DependencySet,
    pub implementation: DependencySet,
}

impl ClassDependencies {
    pub fn get(&self, context: DependencyContext) -> &DependencySet {
        match context {
            DependencyContext::Declaration => &self.declaration,
            DependencyContext::Implementation => &self.implementation,
        }
    }
}

/// Everything an emitter queries; immutable once built
#[derive(Debug, Clone)]
pub struct InterfaceModel {
    config: InterfaceConfig,
    registry: Registry,
    printability: PrintabilityIndex,
    class_order: Vec<String>,
    capabilities: BTreeMap<String, Vec<String>>,
    dependencies: BTreeMap<String, ClassDependencies>,
}

impl InterfaceModel {
    pub(crate) fn new(
        config: InterfaceConfig,
        registry: Registry,
        printability: PrintabilityIndex,
        class_order: Vec<String>,
        capabilities: BTreeMap<String, Vec<String>>,
        dependencies: BTreeMap<String, ClassDependencies>,
    ) -> Self {
        Self {
            config,
            registry,
            printability,
            class_order,
            capabilities,
            dependencies,
        }
    }

    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.registry.class(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.registry.classes()
    }

    pub fn enum_(&self, name: &str) -> Option<&EnumModel> {
        self.registry.enum_(name)
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumModel> {
        self.registry.enums()
    }

    pub fn is_printable(&self, class: &str) -> bool {
        self.printability.is_printable(class)
    }

    pub fn printable_classes(&self) -> impl Iterator<Item = &str> {
        self.printability.printable_classes()
    }

    /// Class names with every base before the classes deriving from it
    pub fn class_order(&self) -> &[String] {
        &self.class_order
    }

    /// Transitive superclasses of `class`, nearest first
    pub fn capabilities(&self, class: &str) -> &[String] {
        self.capabilities
            .get(class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn dependencies(&self, class: &str, context: DependencyContext) -> Option<&DependencySet> {
        self.dependencies.get(class).map(|deps| deps.get(context))
    }

    pub fn class_dependencies(&self, class: &str) -> Option<&ClassDependencies> {
        self.dependencies.get(class)
    }

    /// Stripped value name (`isl_dim_in` → `in`)
    pub fn enum_value_name<'a>(&self, enum_name: &str, value: &'a str) -> &'a str {
        naming::value_name_without_enum(enum_name, value, &self.config)
    }

    pub fn target_class_name(&self, class: &str) -> String {
        naming::to_class_name(class, &self.config)
    }

    pub fn target_method_name(&self, method: &str) -> String {
        naming::to_method_name(method, &self.config)
    }

    pub fn target_enum_value_name(&self, enum_name: &str, value: &str) -> String {
        naming::to_enum_value_name(enum_name, value, &self.config)
    }
}
