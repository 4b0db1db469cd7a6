mod catalog;
mod class_model;
mod enum_model;
mod registry;

pub use catalog::TypeCatalog;
pub use class_model::ClassModel;
pub use enum_model::EnumModel;
pub use registry::Registry;
