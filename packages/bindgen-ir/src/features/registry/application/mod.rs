mod build_registry;

pub use build_registry::RegistryBuilder;
