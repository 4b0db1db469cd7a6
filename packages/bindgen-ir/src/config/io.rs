//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading and export live on
//! [`super::InterfaceConfig`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::interface_config::ReturnOwnershipPolicy;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Field overrides on top of the preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_namespaces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_overrides: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unannotated_return: Option<ReturnOwnershipPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_words: Option<Vec<String>>,
}
