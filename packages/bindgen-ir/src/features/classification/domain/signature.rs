//! Classified function signatures

use serde::{Deserialize, Serialize};

use super::{OwnershipMode, TypeClassification};
use crate::shared::models::CType;

/// A classified formal parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSignature {
    pub name: String,
    pub ty: CType,
    pub classification: TypeClassification,
    pub ownership: OwnershipMode,
}

/// The classified return value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSignature {
    pub ty: CType,
    pub classification: TypeClassification,
    pub ownership: OwnershipMode,
    /// Tri-state boolean result (`isl_bool`-style)
    pub is_bool: bool,
}

/// Everything an emitter needs to know about one C function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Raw C name
    pub name: String,
    /// Owning class
    pub class: String,
    /// Name without class prefix and, for overloads, without the type suffix
    pub method_name: String,
    pub params: Vec<ParamSignature>,
    pub ret: ReturnSignature,
    pub is_constructor: bool,
    pub is_overloaded: bool,
    pub is_static: bool,
    pub has_user_pointer_trailing_param: bool,
}

impl FunctionSignature {
    /// Parameters an emitter exposes after the receiver (if any)
    pub fn explicit_params(&self) -> &[ParamSignature] {
        if self.is_static || self.is_constructor {
            &self.params
        } else {
            &self.params[1..]
        }
    }
}
