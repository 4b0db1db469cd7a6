//! Method classification
//!
//! Turns a raw [`FunctionDeclaration`](crate::shared::models::FunctionDeclaration)
//! into a [`FunctionSignature`]: constructor/static/overload flags, the shape
//! of every parameter and of the return value, and their ownership.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    FunctionSignature, OwnershipMode, ParamSignature, ReturnSignature, TypeClassification,
};
pub use infrastructure::{normalize_overload, MethodClassifier, ShapeDetector};
pub use ports::TypeLookup;
