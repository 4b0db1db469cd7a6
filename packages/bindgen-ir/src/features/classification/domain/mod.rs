mod signature;
mod type_classification;

pub use signature::{FunctionSignature, ParamSignature, ReturnSignature};
pub use type_classification::{OwnershipMode, TypeClassification};
