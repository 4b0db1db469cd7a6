//! Class attribution
//!
//! Order of precedence:
//! 1. the override table (its target class must exist),
//! 2. option-accessor namespaces, which belong to the context class,
//! 3. the longest registered class name that prefixes the function name.
//!
//! Option accessors never fall back to prefix search: without a registered
//! context class they are unattributable.

use crate::config::InterfaceConfig;
use crate::errors::{BindgenError, Result};
use crate::features::classification::TypeLookup;
use crate::features::registry::domain::TypeCatalog;

pub struct ClassAttributor<'a> {
    config: &'a InterfaceConfig,
    catalog: &'a TypeCatalog,
}

impl<'a> ClassAttributor<'a> {
    pub fn new(config: &'a InterfaceConfig, catalog: &'a TypeCatalog) -> Self {
        Self { config, catalog }
    }

    /// Name of the class owning `function`
    pub fn attribute(&self, function: &str) -> Result<&'a str> {
        if let Some(class) = self.config.override_for(function) {
            return match self.catalog.class_names().get(class) {
                Some(name) => Ok(name.as_str()),
                None => Err(BindgenError::UnknownOverrideClass {
                    function: function.to_string(),
                    class: class.to_string(),
                }),
            };
        }

        if self.config.is_context_namespace(function) {
            return self
                .catalog
                .class_names()
                .get(self.catalog.context_class())
                .map(String::as_str)
                .ok_or_else(|| BindgenError::unattributed(function));
        }

        self.longest_prefix(function)
            .ok_or_else(|| BindgenError::unattributed(function))
    }

    /// Two distinct names of equal length cannot both prefix the same
    /// function, so length alone decides.
    fn longest_prefix(&self, function: &str) -> Option<&'a str> {
        self.catalog
            .class_names()
            .iter()
            .map(String::as_str)
            .filter(|class| function.starts_with(*class))
            .max_by_key(|class| class.len())
    }
}
