//! Library convention settings

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use super::validation::Validatable;

/// Functions of isl whose names do not start with their class name
static ISL_ATTRIBUTION_OVERRIDES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [
        ("isl_equality_alloc", "isl_constraint"),
        ("isl_inequality_alloc", "isl_constraint"),
    ]
    .into_iter()
    .map(|(f, c)| (f.to_string(), c.to_string()))
    .collect()
});

/// Method names that collide with keywords of the usual target languages
static DEFAULT_RESERVED_WORDS: &[&str] = &[
    "and", "auto", "case", "class", "default", "delete", "new", "not", "operator", "or",
    "private", "public", "template", "union", "xor",
];

/// Ownership assumed for a class-pointer return without `Give`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnOwnershipPolicy {
    /// Leave it `Unspecified` and report a diagnostic
    #[default]
    Unspecified,
    /// The library documents that every returned object is a new reference
    Given,
}

/// Conventions of the wrapped C library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceConfig {
    preset: Preset,

    /// Prefix shared by every exported name (`isl_`)
    pub library_prefix: String,

    /// Word separator of the naming convention
    pub separator: char,

    /// The distinguished context/handle class
    pub context_class: String,

    /// Name prefixes always attributed to the context class
    pub context_namespaces: Vec<String>,

    /// Class holding the print operations
    pub printer_class: String,

    /// Prefix of the per-class print operation
    pub print_prefix: String,

    /// Function name → class name, consulted before prefix matching
    pub attribution_overrides: BTreeMap<String, String>,

    /// Ownership of unannotated class-pointer returns
    pub unannotated_return: ReturnOwnershipPolicy,

    /// Target-language keywords escaped in generated method names
    pub reserved_words: Vec<String>,
}

impl InterfaceConfig {
    /// Create configuration from preset
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Isl => Self {
                preset,
                library_prefix: "isl_".to_string(),
                separator: '_',
                context_class: "isl_ctx".to_string(),
                context_namespaces: vec!["isl_options_".to_string()],
                printer_class: "isl_printer".to_string(),
                print_prefix: "isl_printer_print_".to_string(),
                attribution_overrides: ISL_ATTRIBUTION_OVERRIDES.clone(),
                unannotated_return: ReturnOwnershipPolicy::Unspecified,
                reserved_words: DEFAULT_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            },
            Preset::Custom => Self {
                preset,
                library_prefix: String::new(),
                separator: '_',
                context_class: "ctx".to_string(),
                context_namespaces: Vec::new(),
                printer_class: "printer".to_string(),
                print_prefix: "printer_print_".to_string(),
                attribution_overrides: BTreeMap::new(),
                unannotated_return: ReturnOwnershipPolicy::Unspecified,
                reserved_words: DEFAULT_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            },
        }
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    pub fn with_override(mut self, function: impl Into<String>, class: impl Into<String>) -> Self {
        self.attribution_overrides
            .insert(function.into(), class.into());
        self
    }

    pub fn with_context_namespace(mut self, prefix: impl Into<String>) -> Self {
        self.context_namespaces.push(prefix.into());
        self
    }

    pub fn with_unannotated_return(mut self, policy: ReturnOwnershipPolicy) -> Self {
        self.unannotated_return = policy;
        self
    }

    /// Class explicitly assigned to `function`, if any
    pub fn override_for(&self, function: &str) -> Option<&str> {
        self.attribution_overrides.get(function).map(String::as_str)
    }

    /// Does `function` belong to an option-accessor namespace?
    pub fn is_context_namespace(&self, function: &str) -> bool {
        self.context_namespaces
            .iter()
            .any(|prefix| function.starts_with(prefix.as_str()))
    }

    /// Name without the library prefix (`isl_basic_set` → `basic_set`)
    pub fn strip_library_prefix<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.library_prefix.as_str())
            .filter(|rest| !rest.is_empty())
            .unwrap_or(name)
    }

    /// Name of the print operation of `class` on the printer class
    pub fn print_function_for(&self, class: &str) -> String {
        format!("{}{}", self.print_prefix, self.strip_library_prefix(class))
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.iter().any(|w| w == word)
    }

    /// Load configuration from a YAML v1 file
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML v1 text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        if raw.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }

        let export: ConfigExportV1 = serde_yaml::from_value(raw)?;
        if export.version != 1 {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: vec![1],
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            config.apply(overrides);
        }
        config.validate()?;
        Ok(config)
    }

    /// Export to YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                library_prefix: Some(self.library_prefix.clone()),
                separator: Some(self.separator),
                context_class: Some(self.context_class.clone()),
                context_namespaces: Some(self.context_namespaces.clone()),
                printer_class: Some(self.printer_class.clone()),
                print_prefix: Some(self.print_prefix.clone()),
                attribution_overrides: Some(self.attribution_overrides.clone()),
                unannotated_return: Some(self.unannotated_return),
                reserved_words: Some(self.reserved_words.clone()),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.library_prefix {
            self.library_prefix = v;
        }
        if let Some(v) = overrides.separator {
            self.separator = v;
        }
        if let Some(v) = overrides.context_class {
            self.context_class = v;
        }
        if let Some(v) = overrides.context_namespaces {
            self.context_namespaces = v;
        }
        if let Some(v) = overrides.printer_class {
            self.printer_class = v;
        }
        if let Some(v) = overrides.print_prefix {
            self.print_prefix = v;
        }
        if let Some(v) = overrides.attribution_overrides {
            // Entries extend the preset table; a repeated key replaces it
            self.attribution_overrides.extend(v);
        }
        if let Some(v) = overrides.unannotated_return {
            self.unannotated_return = v;
        }
        if let Some(v) = overrides.reserved_words {
            self.reserved_words = v;
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self::preset(Preset::Isl)
    }
}

impl Validatable for InterfaceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.context_class.is_empty() {
            return Err(ConfigError::empty_field(
                "context_class",
                "Name the handle type every operation is scoped by (e.g. isl_ctx).",
            ));
        }
        if self.printer_class.is_empty() {
            return Err(ConfigError::empty_field(
                "printer_class",
                "Name the class that owns the print operations (e.g. isl_printer).",
            ));
        }
        if !self.print_prefix.starts_with(self.printer_class.as_str()) {
            return Err(ConfigError::inconsistent(
                format!(
                    "print_prefix '{}' is not a method prefix of printer_class '{}'",
                    self.print_prefix, self.printer_class
                ),
                format!("use '{}_print_'", self.printer_class),
            ));
        }
        if self.separator.is_alphanumeric() {
            return Err(ConfigError::inconsistent(
                format!("separator '{}' is alphanumeric", self.separator),
                "use a punctuation character such as '_'",
            ));
        }
        for (function, class) in &self.attribution_overrides {
            if function.is_empty() || class.is_empty() {
                return Err(ConfigError::empty_field(
                    "attribution_overrides",
                    format!("Override '{}' -> '{}' has an empty side.", function, class),
                ));
            }
        }
        Ok(())
    }
}
