//! Shape and ownership of a single parameter or return value

use serde::{Deserialize, Serialize};

/// What an emitter has to do with a value of this type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TypeClassification {
    /// Pointer to the context class
    ContextHandle,
    /// Pointer to an instance of a known class
    ClassPointer(String),
    /// Value of a known enum
    EnumValue(String),
    /// Pointer to a function
    Callback,
    /// Callback whose last formal parameter is an opaque `void *`
    CallbackWithUserData,
    /// `char *` or `const char *`
    String,
    /// Builtin with unsigned representation
    UnsignedInteger,
    /// Pointer to a pointer to a known class, written by the callee
    ResultOutputParam(String),
    Other,
}

impl TypeClassification {
    pub fn is_class_pointer(&self) -> bool {
        matches!(self, TypeClassification::ClassPointer(_))
    }
}

/// Reference ownership across the call boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipMode {
    /// Caller keeps its reference
    Borrowed,
    /// Callee consumes the reference
    Taken,
    /// Callee hands a new reference to the caller
    Given,
    /// Not a reference, or no convention known
    #[default]
    Unspecified,
}
