mod type_lookup;

pub use type_lookup::TypeLookup;
