//! Method classifier
//!
//! Derives every flag of a [`FunctionSignature`] from the declaration, its
//! owning class and the registered type names. Validation problems are
//! returned as diagnostics; classification always completes.

use super::overload::normalize_overload;
use super::shape::ShapeDetector;
use crate::config::{InterfaceConfig, ReturnOwnershipPolicy};
use crate::features::classification::domain::{
    FunctionSignature, OwnershipMode, ParamSignature, ReturnSignature, TypeClassification,
};
use crate::features::classification::ports::TypeLookup;
use crate::shared::models::{
    Annotation, Diagnostic, DiagnosticKind, FunctionDeclaration, ParamDeclaration,
};

pub struct MethodClassifier<'a, L: TypeLookup + ?Sized> {
    config: &'a InterfaceConfig,
    lookup: &'a L,
    shapes: ShapeDetector<'a, L>,
}

impl<'a, L: TypeLookup + ?Sized> MethodClassifier<'a, L> {
    pub fn new(config: &'a InterfaceConfig, lookup: &'a L) -> Self {
        Self {
            config,
            lookup,
            shapes: ShapeDetector::new(lookup),
        }
    }

    /// Classify `decl` as a member of `class`
    pub fn classify(
        &self,
        class: &str,
        decl: &FunctionDeclaration,
    ) -> (FunctionSignature, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let params: Vec<ParamSignature> =
            decl.params.iter().map(|p| self.classify_param(p)).collect();
        let ret = self.classify_return(class, decl, &mut diagnostics);

        let is_constructor = decl.is_annotated(&Annotation::Constructor);
        let is_overloaded = decl.is_annotated(&Annotation::Overload);
        let has_receiver = params
            .first()
            .map_or(false, |first| self.is_receiver(class, &first.classification));

        if is_constructor {
            if !self.returns_class(class, &ret.classification) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::MismatchedConstructor,
                    class,
                    &decl.name,
                    format!("constructor returns '{}'", decl.return_type.spelling()),
                ));
            }
        } else {
            self.validate_this(class, decl, &params, &mut diagnostics);
        }

        let is_static = !has_receiver || decl.is_annotated(&Annotation::Static);

        let mut method_name = self.base_method_name(class, &decl.name);
        if is_overloaded {
            if let Some(suffix) = params.last().and_then(|p| self.overload_suffix(p)) {
                method_name = normalize_overload(&method_name, &suffix, self.config.separator);
            }
        }

        let has_user_pointer_trailing_param = decl
            .params
            .last()
            .map_or(false, |p| self.shapes.is_opaque_pointer(&p.ty));

        let signature = FunctionSignature {
            name: decl.name.clone(),
            class: class.to_string(),
            method_name,
            params,
            ret,
            is_constructor,
            is_overloaded,
            is_static,
            has_user_pointer_trailing_param,
        };
        (signature, diagnostics)
    }

    fn classify_param(&self, param: &ParamDeclaration) -> ParamSignature {
        let classification = self.shapes.classify(&param.ty);
        let ownership = match &classification {
            TypeClassification::ClassPointer(_) | TypeClassification::ContextHandle => {
                if param.annotations.has(&Annotation::Take) {
                    OwnershipMode::Taken
                } else {
                    OwnershipMode::Borrowed
                }
            }
            TypeClassification::ResultOutputParam(_) => {
                if param.annotations.has(&Annotation::Give) {
                    OwnershipMode::Given
                } else {
                    OwnershipMode::Unspecified
                }
            }
            _ => OwnershipMode::Unspecified,
        };

        ParamSignature {
            name: param.name.clone(),
            ty: param.ty.clone(),
            classification,
            ownership,
        }
    }

    fn classify_return(
        &self,
        class: &str,
        decl: &FunctionDeclaration,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ReturnSignature {
        let classification = self.shapes.classify(&decl.return_type);
        let ownership = match &classification {
            TypeClassification::ClassPointer(_) | TypeClassification::ContextHandle => {
                if decl.is_annotated(&Annotation::Give) {
                    OwnershipMode::Given
                } else {
                    match self.config.unannotated_return {
                        ReturnOwnershipPolicy::Given => OwnershipMode::Given,
                        ReturnOwnershipPolicy::Unspecified => {
                            if classification.is_class_pointer() {
                                diagnostics.push(Diagnostic::new(
                                    DiagnosticKind::UnspecifiedReturnOwnership,
                                    class,
                                    &decl.name,
                                    format!(
                                        "returns '{}' without an ownership annotation",
                                        decl.return_type.spelling()
                                    ),
                                ));
                            }
                            OwnershipMode::Unspecified
                        }
                    }
                }
            }
            _ => OwnershipMode::Unspecified,
        };

        ReturnSignature {
            ty: decl.return_type.clone(),
            classification,
            ownership,
            is_bool: decl.is_annotated(&Annotation::ReturnsBool),
        }
    }

    /// Warn when a method cannot plausibly be called on an instance or on
    /// the context.
    fn validate_this(
        &self,
        class: &str,
        decl: &FunctionDeclaration,
        params: &[ParamSignature],
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let message = match params.first() {
            None => "method has no parameters".to_string(),
            Some(first) => match &first.classification {
                c if self.is_receiver(class, c) => return,
                TypeClassification::ContextHandle => return,
                _ => format!(
                    "first parameter '{}' has type '{}'",
                    first.name,
                    first.ty.spelling()
                ),
            },
        };
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::ImplausibleReceiver,
            class,
            &decl.name,
            message,
        ));
    }

    /// Pointer to the owning class. The context handle is never a receiver,
    /// not even for the context class itself.
    fn is_receiver(&self, class: &str, classification: &TypeClassification) -> bool {
        matches!(classification, TypeClassification::ClassPointer(name) if name == class)
    }

    /// The context class is returned as the context handle
    fn returns_class(&self, class: &str, classification: &TypeClassification) -> bool {
        match classification {
            TypeClassification::ContextHandle => class == self.lookup.context_class(),
            other => self.is_receiver(class, other),
        }
    }

    /// Function name without the owning class prefix. Functions attributed
    /// by override or namespace only lose the library prefix.
    fn base_method_name(&self, class: &str, function: &str) -> String {
        let class_prefix = format!("{}{}", class, self.config.separator);
        match function.strip_prefix(class_prefix.as_str()) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => self.config.strip_library_prefix(function).to_string(),
        }
    }

    /// Trailing name component contributed by the type of a parameter
    fn overload_suffix(&self, param: &ParamSignature) -> Option<String> {
        let name = match &param.classification {
            TypeClassification::ClassPointer(name)
            | TypeClassification::ResultOutputParam(name)
            | TypeClassification::EnumValue(name) => {
                self.config.strip_library_prefix(name).to_string()
            }
            TypeClassification::ContextHandle => self
                .config
                .strip_library_prefix(self.lookup.context_class())
                .to_string(),
            TypeClassification::UnsignedInteger | TypeClassification::Other => {
                let name = param.ty.nominal_name()?;
                self.config
                    .strip_library_prefix(name)
                    .replace(' ', &self.config.separator.to_string())
            }
            TypeClassification::String
            | TypeClassification::Callback
            | TypeClassification::CallbackWithUserData => return None,
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::shared::models::CType;
    use std::collections::HashSet;

    struct Names(HashSet<&'static str>);

    impl TypeLookup for Names {
        fn is_class(&self, name: &str) -> bool {
            self.0.contains(name)
        }
        fn is_enum(&self, name: &str) -> bool {
            name == "isl_dim_type"
        }
        fn context_class(&self) -> &str {
            "isl_ctx"
        }
    }

    fn lookup() -> Names {
        Names(["isl_ctx", "isl_set", "isl_map", "isl_point"].into_iter().collect())
    }

    fn obj(name: &str) -> CType {
        CType::object_pointer(name)
    }

    fn param(name: &str, ty: CType) -> ParamDeclaration {
        ParamDeclaration::new(name, ty)
    }

    #[test]
    fn test_instance_method_with_ownership() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_intersect", obj("isl_set"))
            .with_annotation(Annotation::Give)
            .with_param(param("set1", obj("isl_set")).with_annotation(Annotation::Take))
            .with_param(param("set2", obj("isl_set")));

        let (sig, diags) = classifier.classify("isl_set", &decl);
        assert!(diags.is_empty());
        assert_eq!(sig.method_name, "intersect");
        assert!(!sig.is_static);
        assert!(!sig.is_constructor);
        assert_eq!(sig.params[0].ownership, OwnershipMode::Taken);
        assert_eq!(sig.params[1].ownership, OwnershipMode::Borrowed);
        assert_eq!(sig.ret.ownership, OwnershipMode::Given);
        assert_eq!(sig.explicit_params().len(), 1);
    }

    #[test]
    fn test_static_when_first_param_is_other_class() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_from_map", obj("isl_set"))
            .with_annotation(Annotation::Give)
            .with_param(param("map", obj("isl_map")).with_annotation(Annotation::Take));

        let (sig, diags) = classifier.classify("isl_set", &decl);
        assert!(sig.is_static);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::ImplausibleReceiver);
    }

    #[test]
    fn test_zero_params_is_static() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_version", CType::builtin("int"));

        let (sig, diags) = classifier.classify("isl_set", &decl);
        assert!(sig.is_static);
        assert_eq!(diags[0].kind, DiagnosticKind::ImplausibleReceiver);
    }

    #[test]
    fn test_context_first_param_is_static_without_warning() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_read_from_str", obj("isl_set"))
            .with_annotation(Annotation::Give)
            .with_param(param("ctx", obj("isl_ctx")))
            .with_param(param("str", CType::pointer(CType::constant(CType::builtin("char")))));

        let (sig, diags) = classifier.classify("isl_set", &decl);
        assert!(sig.is_static);
        assert!(diags.is_empty());
        assert_eq!(sig.params[0].classification, TypeClassification::ContextHandle);
        assert_eq!(sig.params[1].classification, TypeClassification::String);
    }

    #[test]
    fn test_context_class_methods_are_static() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_ctx_abort", CType::Void)
            .with_param(param("ctx", obj("isl_ctx")));

        let (sig, diags) = classifier.classify("isl_ctx", &decl);
        assert_eq!(sig.params[0].classification, TypeClassification::ContextHandle);
        assert!(sig.is_static);
        assert_eq!(sig.explicit_params().len(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_context_class_constructor_returns_handle() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_ctx_alloc", obj("isl_ctx"))
            .with_annotation(Annotation::Constructor)
            .with_annotation(Annotation::Give);

        let (sig, diags) = classifier.classify("isl_ctx", &decl);
        assert!(sig.is_constructor);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_static_annotation_forces_static() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_dump", CType::Void)
            .with_annotation(Annotation::Static)
            .with_param(param("set", obj("isl_set")));

        let (sig, _) = classifier.classify("isl_set", &decl);
        assert!(sig.is_static);
    }

    #[test]
    fn test_mismatched_constructor_is_warning() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_universe_map", obj("isl_map"))
            .with_annotation(Annotation::Constructor)
            .with_annotation(Annotation::Give)
            .with_param(param("ctx", obj("isl_ctx")));

        let (sig, diags) = classifier.classify("isl_set", &decl);
        assert!(sig.is_constructor);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::MismatchedConstructor);
    }

    #[test]
    fn test_overload_suffix_from_last_param() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let by_point = FunctionDeclaration::new("isl_set_area_point", CType::builtin("int"))
            .with_annotation(Annotation::Overload)
            .with_param(param("set", obj("isl_set")))
            .with_param(param("pnt", obj("isl_point")));
        let by_int = FunctionDeclaration::new("isl_set_area", CType::builtin("int"))
            .with_annotation(Annotation::Overload)
            .with_param(param("set", obj("isl_set")))
            .with_param(param("n", CType::builtin("int")));
        let by_unsigned =
            FunctionDeclaration::new("isl_set_area_unsigned_int", CType::builtin("int"))
                .with_annotation(Annotation::Overload)
                .with_param(param("set", obj("isl_set")))
                .with_param(param("n", CType::builtin("unsigned int")));

        assert_eq!(classifier.classify("isl_set", &by_point).0.method_name, "area");
        assert_eq!(classifier.classify("isl_set", &by_int).0.method_name, "area");
        assert_eq!(classifier.classify("isl_set", &by_unsigned).0.method_name, "area");
    }

    #[test]
    fn test_suffix_kept_without_overload_annotation() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let decl = FunctionDeclaration::new("isl_set_area_point", CType::builtin("int"))
            .with_param(param("set", obj("isl_set")))
            .with_param(param("pnt", obj("isl_point")));

        let (sig, _) = classifier.classify("isl_set", &decl);
        assert!(!sig.is_overloaded);
        assert_eq!(sig.method_name, "area_point");
    }

    #[test]
    fn test_unannotated_return_policy() {
        let names = lookup();
        let decl = FunctionDeclaration::new("isl_set_copy", obj("isl_set"))
            .with_param(param("set", obj("isl_set")));

        let config = InterfaceConfig::preset(Preset::Isl);
        let (sig, diags) = MethodClassifier::new(&config, &names).classify("isl_set", &decl);
        assert_eq!(sig.ret.ownership, OwnershipMode::Unspecified);
        assert_eq!(diags[0].kind, DiagnosticKind::UnspecifiedReturnOwnership);

        let config = InterfaceConfig::preset(Preset::Isl)
            .with_unannotated_return(ReturnOwnershipPolicy::Given);
        let (sig, diags) = MethodClassifier::new(&config, &names).classify("isl_set", &decl);
        assert_eq!(sig.ret.ownership, OwnershipMode::Given);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_trailing_user_pointer() {
        let config = InterfaceConfig::preset(Preset::Isl);
        let names = lookup();
        let classifier = MethodClassifier::new(&config, &names);
        let callback = CType::pointer(CType::function(
            vec![obj("isl_set"), CType::pointer(CType::Void)],
            CType::builtin("int"),
        ));
        let decl = FunctionDeclaration::new("isl_set_foreach_point", CType::builtin("int"))
            .with_param(param("set", obj("isl_set")))
            .with_param(param("fn", callback))
            .with_param(param("user", CType::pointer(CType::Void)));

        let (sig, _) = classifier.classify("isl_set", &decl);
        assert!(sig.has_user_pointer_trailing_param);
        assert_eq!(sig.params[1].classification, TypeClassification::CallbackWithUserData);
    }
}
