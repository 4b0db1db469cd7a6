//! Error types for bindgen-ir
//!
//! Every variant is fatal: the build phase stops at the first one and no
//! partially built model is handed to an emitter. Non-fatal findings are
//! reported as [`crate::shared::models::Diagnostic`] values instead.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for model construction
#[derive(Debug, Error)]
pub enum BindgenError {
    /// No class name prefixes the function and no override applies
    #[error("Cannot attribute function '{function}' to any class")]
    UnattributedFunction { function: String },

    /// Override table points at a class that was never declared
    #[error("Override for function '{function}' names unknown class '{class}'")]
    UnknownOverrideClass { function: String, class: String },

    /// Declared superclass is not a registered class
    #[error("Class '{class}' declares unknown superclass '{superclass}'")]
    UnknownSuperclass { class: String, superclass: String },

    /// Superclass relation is not acyclic
    #[error("Superclass cycle: {}", cycle.join(" -> "))]
    SuperclassCycle { cycle: Vec<String> },

    /// Two declarations of the same kind share a name
    #[error("Duplicate {kind} declaration '{name}'")]
    DuplicateDeclaration { kind: &'static str, name: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Declaration set could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BindgenError {
    pub fn unattributed(function: impl Into<String>) -> Self {
        BindgenError::UnattributedFunction {
            function: function.into(),
        }
    }

    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        BindgenError::DuplicateDeclaration {
            kind,
            name: name.into(),
        }
    }
}

/// Result type alias for model construction
pub type Result<T> = std::result::Result<T, BindgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message() {
        let err = BindgenError::SuperclassCycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "Superclass cycle: a -> b -> a");
    }

    #[test]
    fn test_config_error_converts() {
        let err: BindgenError = ConfigError::MissingVersion.into();
        assert!(matches!(err, BindgenError::Config(_)));
    }
}
