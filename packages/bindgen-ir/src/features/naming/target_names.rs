//! Target-language identifiers
//!
//! Classes become UpperCamelCase without the library prefix
//! (`isl_basic_set` → `BasicSet`), methods lowerCamelCase
//! (`read_from_str` → `readFromStr`).

use super::enum_namer::value_name_without_enum;
use crate::config::InterfaceConfig;

pub fn to_upper_camel(name: &str, separator: char) -> String {
    name.split(separator)
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn to_lower_camel(name: &str, separator: char) -> String {
    let upper = to_upper_camel(name, separator);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Class identifier (`isl_union_map` → `UnionMap`)
pub fn to_class_name(class: &str, config: &InterfaceConfig) -> String {
    to_upper_camel(config.strip_library_prefix(class), config.separator)
}

/// Method identifier, escaped when it collides with a reserved word
pub fn to_method_name(method: &str, config: &InterfaceConfig) -> String {
    let name = to_lower_camel(method, config.separator);
    if config.is_reserved(&name) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Enum value identifier (`isl_dim_param` of `isl_dim_type` → `Param`)
pub fn to_enum_value_name(enum_name: &str, value: &str, config: &InterfaceConfig) -> String {
    to_upper_camel(value_name_without_enum(enum_name, value, config), config.separator)
}
