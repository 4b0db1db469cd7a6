//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/         - Pure model types
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Algorithms behind the ports

/// Class and enum registries, class attribution
pub mod registry;

/// Per-function classification: shapes, ownership, overloads
pub mod classification;

/// Declared superclass relation and its validation
pub mod subclass;

/// Include vs. forward-declaration sets per class
pub mod dependencies;

/// Enum value names and target-language identifiers
pub mod naming;
