//! Dependency resolution per class
//!
//! Declaration context:
//! - class pointers, result-output parameters and the context handle are
//!   only named → forward
//! - superclasses and enum values need the full definition → include
//! - classes handed to a callback are wrapped inline by its trampoline → include
//! - a printable class formats itself through the printer class inline → include
//!
//! Implementation context: the same dependencies, all included.

use crate::config::InterfaceConfig;
use crate::features::classification::{ShapeDetector, TypeClassification, TypeLookup};
use crate::features::dependencies::domain::{
    Dependency, DependencyContext, DependencyKind, DependencySet,
};
use crate::features::registry::{ClassModel, TypeCatalog};
use crate::shared::models::CType;

pub struct DependencyResolver<'a> {
    config: &'a InterfaceConfig,
    catalog: &'a TypeCatalog,
    shapes: ShapeDetector<'a, TypeCatalog>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(config: &'a InterfaceConfig, catalog: &'a TypeCatalog) -> Self {
        Self {
            config,
            catalog,
            shapes: ShapeDetector::new(catalog),
        }
    }

    /// Compute the dependency set of `class` for one artifact
    pub fn resolve(
        &self,
        class: &ClassModel,
        printable: bool,
        context: DependencyContext,
    ) -> DependencySet {
        let force_include = context == DependencyContext::Implementation;
        let mut sink = Sink {
            owner: &class.name,
            deps: DependencySet::new(),
            force_include,
        };

        for function in class.all_functions() {
            for param in &function.params {
                self.insert_use(&mut sink, &param.classification, &param.ty);
            }
            self.insert_use(&mut sink, &function.ret.classification, &function.ret.ty);
        }

        for superclass in &class.superclasses {
            sink.add(Dependency::class(superclass), true);
        }

        if printable {
            sink.add(Dependency::class(&self.config.printer_class), true);
        }

        sink.deps
    }

    fn insert_use(&self, sink: &mut Sink<'_>, classification: &TypeClassification, ty: &CType) {
        match classification {
            TypeClassification::ClassPointer(name)
            | TypeClassification::ResultOutputParam(name) => {
                sink.add(Dependency::class(name), false);
            }
            TypeClassification::ContextHandle => {
                sink.add(Dependency::class(self.catalog.context_class()), false);
            }
            TypeClassification::EnumValue(name) => {
                sink.add(Dependency::enumeration(name), true);
            }
            TypeClassification::Callback | TypeClassification::CallbackWithUserData => {
                for arg in self.shapes.callback_params(ty).unwrap_or(&[]) {
                    if let Some(name) = self.shapes.class_of_pointer(arg) {
                        sink.add(Dependency::class(name), true);
                    } else if let Some(name) = self.shapes.enum_of(arg) {
                        sink.add(Dependency::enumeration(name), true);
                    }
                }
            }
            TypeClassification::String
            | TypeClassification::UnsignedInteger
            | TypeClassification::Other => {}
        }
    }
}

/// Accumulates one set, never recording the owning class itself
struct Sink<'o> {
    owner: &'o str,
    deps: DependencySet,
    force_include: bool,
}

impl Sink<'_> {
    fn add(&mut self, dep: Dependency, include_required: bool) {
        if dep.kind == DependencyKind::Class && dep.name == self.owner {
            return;
        }
        self.deps.insert(dep, include_required || self.force_include);
    }
}
