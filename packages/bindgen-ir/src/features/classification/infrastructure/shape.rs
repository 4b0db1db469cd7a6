//! Shape predicates over C types
//!
//! Pure functions of the type and the registered names; none of them depends
//! on the class currently being classified.

use crate::features::classification::domain::TypeClassification;
use crate::features::classification::ports::TypeLookup;
use crate::shared::models::CType;

pub struct ShapeDetector<'a, L: TypeLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: TypeLookup + ?Sized> ShapeDetector<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Known class a pointer type points to. The nominal pointee name is
    /// tried first, then its canonical record.
    pub fn class_of_pointer(&self, ty: &CType) -> Option<String> {
        let pointee = ty.pointee()?.unqualified();
        if let Some(name) = pointee.nominal_name() {
            if self.lookup.is_class(name) {
                return Some(name.to_string());
            }
        }
        match pointee.canonical() {
            CType::Record { name } if self.lookup.is_class(name) => Some(name.clone()),
            _ => None,
        }
    }

    pub fn is_context_handle(&self, ty: &CType) -> bool {
        self.class_of_pointer(ty).as_deref() == Some(self.lookup.context_class())
    }

    pub fn is_class_pointer(&self, ty: &CType) -> bool {
        self.class_of_pointer(ty).is_some()
    }

    /// Known enum named either by a typedef or as `enum <name>`
    pub fn enum_of(&self, ty: &CType) -> Option<String> {
        let ty = ty.unqualified();
        if let CType::Typedef { name, .. } = ty {
            if self.lookup.is_enum(name) {
                return Some(name.clone());
            }
        }
        match ty.canonical() {
            CType::Enum { name } if self.lookup.is_enum(name) => Some(name.clone()),
            _ => None,
        }
    }

    pub fn is_enum(&self, ty: &CType) -> bool {
        self.enum_of(ty).is_some()
    }

    /// Formal parameters of the function a callback points to
    pub fn callback_params<'t>(&self, ty: &'t CType) -> Option<&'t [CType]> {
        match ty.pointee()?.canonical() {
            CType::Function { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn is_callback(&self, ty: &CType) -> bool {
        self.callback_params(ty).is_some()
    }

    pub fn is_callback_with_user_data(&self, ty: &CType) -> bool {
        self.callback_params(ty)
            .and_then(|params| params.last())
            .map_or(false, |last| self.is_opaque_pointer(last))
    }

    /// `char *` or `const char *`
    pub fn is_string(&self, ty: &CType) -> bool {
        match ty.pointee().map(CType::canonical) {
            Some(CType::Builtin { name, .. }) => name == "char",
            _ => false,
        }
    }

    pub fn is_unsigned_integer(&self, ty: &CType) -> bool {
        matches!(ty.canonical(), CType::Builtin { unsigned: true, .. })
    }

    /// Class written through a `T **` out parameter
    pub fn result_output_class(&self, ty: &CType) -> Option<String> {
        let inner = ty.pointee()?;
        self.class_of_pointer(inner)
    }

    pub fn is_result_output_param(&self, ty: &CType) -> bool {
        self.result_output_class(ty).is_some()
    }

    /// `void *` (after typedefs and qualifiers)
    pub fn is_opaque_pointer(&self, ty: &CType) -> bool {
        ty.pointee().map_or(false, CType::is_void)
    }

    /// Classify a type; the first matching shape wins
    pub fn classify(&self, ty: &CType) -> TypeClassification {
        if let Some(class) = self.class_of_pointer(ty) {
            if class == self.lookup.context_class() {
                return TypeClassification::ContextHandle;
            }
            return TypeClassification::ClassPointer(class);
        }
        if let Some(class) = self.result_output_class(ty) {
            return TypeClassification::ResultOutputParam(class);
        }
        if let Some(name) = self.enum_of(ty) {
            return TypeClassification::EnumValue(name);
        }
        if self.is_callback_with_user_data(ty) {
            return TypeClassification::CallbackWithUserData;
        }
        if self.is_callback(ty) {
            return TypeClassification::Callback;
        }
        if self.is_string(ty) {
            return TypeClassification::String;
        }
        if self.is_unsigned_integer(ty) {
            return TypeClassification::UnsignedInteger;
        }
        TypeClassification::Other
    }
}
