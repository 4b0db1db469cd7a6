//! Interface model builder
//!
//! Runs every stage once over the immutable input. The first fatal
//! condition aborts the build; warnings travel alongside the model.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::info;

use super::interface_model::{ClassDependencies, InterfaceModel};
use crate::config::{InterfaceConfig, Validatable};
use crate::errors::Result;
use crate::features::dependencies::{DependencyContext, DependencyResolver};
use crate::features::registry::{ClassModel, PrintabilityIndex, RegistryBuilder};
use crate::features::subclass::SuperclassGraph;
use crate::shared::models::{DeclarationSet, Diagnostics};

/// Model plus the warnings collected while building it
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub model: InterfaceModel,
    pub diagnostics: Diagnostics,
}

/// # Example
/// ```ignore
/// let output = InterfaceBuilder::new(InterfaceConfig::preset(Preset::Isl)).build(&decls)?;
/// for warning in output.diagnostics.iter() {
///     eprintln!("{}", warning);
/// }
/// let set = output.model.class("isl_set").unwrap();
/// ```
pub struct InterfaceBuilder {
    config: InterfaceConfig,
}

impl InterfaceBuilder {
    pub fn new(config: InterfaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    pub fn build(&self, decls: &DeclarationSet) -> Result<BuildOutput> {
        self.config.validate()?;

        let (registry, diagnostics) = RegistryBuilder::new(&self.config).build(decls)?;

        let superclasses = SuperclassGraph::build(&registry)?;
        let class_order = superclasses.topological_order().to_vec();
        let capabilities: BTreeMap<String, Vec<String>> = registry
            .classes()
            .filter(|c| c.is_subclass())
            .map(|c| (c.name.clone(), superclasses.ancestors(&c.name)))
            .collect();

        let printability = PrintabilityIndex::compute(&registry, &self.config);

        let resolver = DependencyResolver::new(&self.config, registry.catalog());
        let resolve = |class: &ClassModel| {
            let printable = printability.is_printable(&class.name);
            let deps = ClassDependencies {
                declaration: resolver.resolve(class, printable, DependencyContext::Declaration),
                implementation: resolver.resolve(
                    class,
                    printable,
                    DependencyContext::Implementation,
                ),
            };
            (class.name.clone(), deps)
        };

        let classes: Vec<&ClassModel> = registry.classes().collect();
        #[cfg(feature = "parallel")]
        let dependencies: BTreeMap<String, ClassDependencies> =
            classes.par_iter().map(|c| resolve(*c)).collect();
        #[cfg(not(feature = "parallel"))]
        let dependencies: BTreeMap<String, ClassDependencies> =
            classes.iter().map(|c| resolve(*c)).collect();

        info!(
            "interface model built: {} classes, {} functions, {} enums, {} warnings",
            registry.class_count(),
            registry.function_count(),
            registry.enums().count(),
            diagnostics.len()
        );

        let model = InterfaceModel::new(
            self.config.clone(),
            registry,
            printability,
            class_order,
            capabilities,
            dependencies,
        );
        Ok(BuildOutput { model, diagnostics })
    }
}
