//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required field is empty
    #[error("Field '{field}' must not be empty. {hint}")]
    EmptyField { field: String, hint: String },

    /// Two fields contradict each other
    #[error("Inconsistent configuration: {issue}. Fix: {fix}")]
    Inconsistent { issue: String, fix: String },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: isl, custom")]
    UnknownPreset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub fn empty_field(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
            hint: hint.into(),
        }
    }

    pub fn inconsistent(issue: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::Inconsistent {
            issue: issue.into(),
            fix: fix.into(),
        }
    }
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
