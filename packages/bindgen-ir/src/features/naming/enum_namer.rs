//! Enum value namer
//!
//! `isl_dim_type` values are spelled `isl_dim_in`, `isl_dim_out`, ...: the
//! enum name minus its last word is the shared prefix.

use crate::config::InterfaceConfig;

/// Value name with the common enum prefix removed
///
/// Tries, in order: the full enum name followed by the separator, the enum
/// name up to and including its last separator, the library prefix. The
/// first prefix that leaves a non-empty remainder wins; otherwise the name
/// is returned unchanged.
pub fn value_name_without_enum<'a>(
    enum_name: &str,
    value: &'a str,
    config: &InterfaceConfig,
) -> &'a str {
    let separator = config.separator;
    let full = format!("{}{}", enum_name, separator);
    let stem = enum_name
        .rfind(separator)
        .map(|at| &enum_name[..at + separator.len_utf8()]);

    let candidates = [Some(full.as_str()), stem, Some(config.library_prefix.as_str())];
    for prefix in candidates.into_iter().flatten() {
        if prefix.is_empty() {
            continue;
        }
        if let Some(rest) = value.strip_prefix(prefix) {
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    value
}
