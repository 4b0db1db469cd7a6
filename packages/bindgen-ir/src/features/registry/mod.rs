//! Class/Enum Registry
//!
//! Seeds one class per type declaration, attributes every function to
//! exactly one class, classifies it and files it as constructor or under
//! its overload-normalized method name. The result is an immutable
//! [`Registry`] snapshot; nothing global survives the build.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::RegistryBuilder;
pub use domain::{ClassModel, EnumModel, Registry, TypeCatalog};
pub use infrastructure::{ClassAttributor, PrintabilityIndex};
