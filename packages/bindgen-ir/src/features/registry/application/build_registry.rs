//! Registry build use case

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::InterfaceConfig;
use crate::errors::{BindgenError, Result};
use crate::features::classification::{FunctionSignature, MethodClassifier};
use crate::features::registry::domain::{ClassModel, EnumModel, Registry, TypeCatalog};
use crate::features::registry::infrastructure::ClassAttributor;
use crate::shared::models::{DeclarationSet, Diagnostic, Diagnostics, FunctionDeclaration};

/// Builds the immutable [`Registry`] from the three input sets
///
/// # Example
/// ```ignore
/// let builder = RegistryBuilder::new(&config);
/// let (registry, diagnostics) = builder.build(&decls)?;
/// ```
pub struct RegistryBuilder<'a> {
    config: &'a InterfaceConfig,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(config: &'a InterfaceConfig) -> Self {
        Self { config }
    }

    /// Seed classes and enums, attribute and classify every function
    ///
    /// Fails on the first function that cannot be attributed; warnings are
    /// collected into the returned [`Diagnostics`].
    pub fn build(&self, decls: &DeclarationSet) -> Result<(Registry, Diagnostics)> {
        decls.check_unique()?;

        let catalog = TypeCatalog::from_declarations(decls, &self.config.context_class);
        let mut classes: BTreeMap<String, ClassModel> = decls
            .types
            .iter()
            .map(|t| (t.name.clone(), ClassModel::from_declaration(t, self.config)))
            .collect();
        let enums: BTreeMap<String, EnumModel> = decls
            .enums
            .iter()
            .map(|e| (e.name.clone(), EnumModel::from_declaration(e)))
            .collect();
        info!(
            "registry seeded: {} classes, {} enums",
            classes.len(),
            enums.len()
        );

        let attributor = ClassAttributor::new(self.config, &catalog);
        let attributed = decls
            .functions
            .iter()
            .map(|f| attributor.attribute(&f.name).map(|class| (class, f)))
            .collect::<Result<Vec<(&str, &FunctionDeclaration)>>>()?;
        debug!("attributed {} functions", attributed.len());

        let classified = self.classify_all(&catalog, &attributed);

        let mut diagnostics = Diagnostics::new();
        for (signature, warnings) in classified {
            warnings.into_iter().for_each(|w| diagnostics.push(w));
            let class = classes
                .get_mut(&signature.class)
                .ok_or_else(|| BindgenError::unattributed(&signature.name))?;
            class.insert(signature);
        }
        info!(
            "classified {} functions ({} warnings)",
            attributed.len(),
            diagnostics.len()
        );

        Ok((Registry::new(catalog, classes, enums), diagnostics))
    }

    /// Per-function classification only reads the catalog, so it runs in
    /// parallel once the catalog is complete.
    fn classify_all(
        &self,
        catalog: &TypeCatalog,
        attributed: &[(&str, &FunctionDeclaration)],
    ) -> Vec<(FunctionSignature, Vec<Diagnostic>)> {
        let classifier = MethodClassifier::new(self.config, catalog);

        #[cfg(feature = "parallel")]
        let iter = attributed.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = attributed.iter();

        iter.map(|(class, decl)| classifier.classify(class, decl))
            .collect()
    }
}
