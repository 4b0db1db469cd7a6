/// Read-only view of the registered type names
///
/// Classification only needs to know which names are classes and enums;
/// the registry implements this once it has been seeded.
pub trait TypeLookup: Send + Sync {
    fn is_class(&self, name: &str) -> bool;

    fn is_enum(&self, name: &str) -> bool;

    /// Name of the distinguished context class
    fn context_class(&self) -> &str;
}
