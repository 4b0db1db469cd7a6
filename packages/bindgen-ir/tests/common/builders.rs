//! Test data builders

use bindgen_ir::shared::models::{
    Annotation, CType, DeclarationSet, EnumDeclaration, FunctionDeclaration, ParamDeclaration,
    TypeDeclaration,
};

/// Pointer to the class `name`, spelled through its typedef
pub fn obj(name: &str) -> CType {
    CType::object_pointer(name)
}

/// `const char *`
pub fn c_string() -> CType {
    CType::pointer(CType::constant(CType::builtin("char")))
}

/// `void *`
pub fn user_pointer() -> CType {
    CType::pointer(CType::Void)
}

pub fn param(name: &str, ty: CType) -> ParamDeclaration {
    ParamDeclaration::new(name, ty)
}

pub fn taken(name: &str, class: &str) -> ParamDeclaration {
    ParamDeclaration::new(name, obj(class)).with_annotation(Annotation::Take)
}

pub fn kept(name: &str, class: &str) -> ParamDeclaration {
    ParamDeclaration::new(name, obj(class)).with_annotation(Annotation::Keep)
}

/// Builder for DeclarationSet
#[derive(Debug, Default)]
pub struct DeclarationSetBuilder {
    types: Vec<TypeDeclaration>,
    functions: Vec<FunctionDeclaration>,
    enums: Vec<EnumDeclaration>,
    next_id: u64,
}

impl DeclarationSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class with no superclasses
    pub fn class(self, name: &str) -> Self {
        self.subclass(name, &[])
    }

    /// Add a class tagged as subclass of each of `superclasses`
    pub fn subclass(mut self, name: &str, superclasses: &[&str]) -> Self {
        self.next_id += 1;
        let mut decl = TypeDeclaration::new(name, self.next_id);
        for superclass in superclasses {
            decl = decl.with_annotation(Annotation::Subclass(superclass.to_string()));
        }
        self.types.push(decl);
        self
    }

    pub fn function(mut self, function: FunctionDeclaration) -> Self {
        self.functions.push(function);
        self
    }

    /// `<class>_free(__isl_take <class> *)`
    pub fn destructor(self, class: &str) -> Self {
        self.function(
            FunctionDeclaration::new(format!("{}_free", class), CType::Void)
                .with_param(taken(class.rsplit('_').next().unwrap_or(class), class)),
        )
    }

    pub fn enumeration(mut self, name: &str, values: &[(&str, i64)]) -> Self {
        let decl = values
            .iter()
            .fold(EnumDeclaration::new(name), |decl, (value, number)| {
                decl.with_value(*value, *number)
            });
        self.enums.push(decl);
        self
    }

    pub fn build(self) -> DeclarationSet {
        DeclarationSet::new(self.types, self.functions, self.enums)
            .expect("test declarations must be unique")
    }
}
