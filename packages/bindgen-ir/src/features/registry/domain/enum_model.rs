//! Enum model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::InterfaceConfig;
use crate::features::naming::value_name_without_enum;
use crate::shared::models::EnumDeclaration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumModel {
    pub name: String,
    /// Raw value name → integer value
    pub values: BTreeMap<String, i64>,
}

impl EnumModel {
    pub fn from_declaration(decl: &EnumDeclaration) -> Self {
        Self {
            name: decl.name.clone(),
            values: decl.values.iter().cloned().collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Value name without the common enum prefix (`isl_dim_in` → `in`)
    pub fn name_without_enum<'a>(&self, value: &'a str, config: &InterfaceConfig) -> &'a str {
        value_name_without_enum(&self.name, value, config)
    }

    /// Values sorted by integer value, then name
    pub fn values_by_number(&self) -> Vec<(&str, i64)> {
        let mut values: Vec<(&str, i64)> =
            self.values.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        values.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        values
    }
}
