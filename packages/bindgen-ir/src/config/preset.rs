//! Preset configurations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Conventions of the isl integer set library
    ///
    /// - Prefix `isl_`, context `isl_ctx`, printer `isl_printer`
    /// - `isl_options_*` accessors belong to the context
    /// - `isl_equality_alloc` / `isl_inequality_alloc` belong to `isl_constraint`
    Isl,

    /// Custom: no prefix, no overrides
    ///
    /// Users must fill in the conventions via YAML or by setting fields.
    Custom,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "isl" => Ok(Self::Isl),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isl => write!(f, "isl"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("ISL").unwrap(), Preset::Isl);
        assert_eq!(Preset::from_str("custom").unwrap(), Preset::Custom);
        assert!(Preset::from_str("polly").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for preset in [Preset::Isl, Preset::Custom] {
            assert_eq!(Preset::from_str(&preset.to_string()).unwrap(), preset);
        }
    }
}
