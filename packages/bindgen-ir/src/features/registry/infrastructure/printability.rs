//! Printability memo
//!
//! A class is printable when the printer class exposes
//! a method named `<print_prefix><unqualified class name>`; a constructor
//! with that name does not count. Computed once per registry.

use std::collections::{BTreeSet, HashSet};

use crate::config::InterfaceConfig;
use crate::features::registry::domain::Registry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintabilityIndex {
    printable: BTreeSet<String>,
}

impl PrintabilityIndex {
    pub fn compute(registry: &Registry, config: &InterfaceConfig) -> Self {
        let Some(printer) = registry.class(&config.printer_class) else {
            tracing::debug!("printer class '{}' not registered", config.printer_class);
            return Self::default();
        };

        let print_methods: HashSet<&str> =
            printer.all_methods().map(|f| f.name.as_str()).collect();
        let printable = registry
            .classes()
            .filter(|class| {
                print_methods.contains(config.print_function_for(&class.name).as_str())
            })
            .map(|class| class.name.clone())
            .collect();

        Self { printable }
    }

    pub fn is_printable(&self, class: &str) -> bool {
        self.printable.contains(class)
    }

    pub fn printable_classes(&self) -> impl Iterator<Item = &str> {
        self.printable.iter().map(String::as_str)
    }
}
