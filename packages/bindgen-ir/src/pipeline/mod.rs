//! Pipeline orchestration
//!
//! registry → attribution → classification → superclass validation →
//! printability → dependency resolution, producing a frozen
//! [`InterfaceModel`] for emitters.

mod interface_builder;
mod interface_model;

pub use interface_builder::{BuildOutput, InterfaceBuilder};
pub use interface_model::{ClassDependencies, InterfaceModel};
