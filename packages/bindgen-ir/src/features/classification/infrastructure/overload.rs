//! Overload grouping key
//!
//! Sibling overloads differ only by the type of their last argument, which
//! the C names spell as a trailing suffix (`area_point`, `area_val`).
//! Removing that suffix yields the name all siblings share.

/// Strip `<separator><suffix>` from the end of `name`.
///
/// Stripping repeats while the suffix is still trailing so that the result
/// is a fixed point: normalizing a normalized name changes nothing. The name
/// is never reduced to nothing.
pub fn normalize_overload(name: &str, suffix: &str, separator: char) -> String {
    if suffix.is_empty() {
        return name.to_string();
    }

    let tail = format!("{}{}", separator, suffix);
    let mut normalized = name;
    while let Some(stripped) = normalized.strip_suffix(tail.as_str()) {
        if stripped.is_empty() {
            break;
        }
        normalized = stripped;
    }
    normalized.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_trailing_type() {
        assert_eq!(normalize_overload("area_point", "point", '_'), "area");
        assert_eq!(normalize_overload("union_set", "union_set", '_'), "union_set");
        assert_eq!(normalize_overload("add_union_set", "union_set", '_'), "add");
    }

    #[test]
    fn test_untouched_when_suffix_absent() {
        assert_eq!(normalize_overload("area", "int", '_'), "area");
        // Suffix must be separated from the stem
        assert_eq!(normalize_overload("areapoint", "point", '_'), "areapoint");
        assert_eq!(normalize_overload("area", "", '_'), "area");
    }

    #[test]
    fn test_never_empties_name() {
        assert_eq!(normalize_overload("_point", "point", '_'), "_point");
    }

    proptest! {
        #[test]
        fn prop_idempotent(stem in "[a-z]{1,8}(_[a-z]{1,6}){0,3}", suffix in "[a-z]{1,6}") {
            let once = normalize_overload(&stem, &suffix, '_');
            let twice = normalize_overload(&once, &suffix, '_');
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_result_is_prefix(stem in "[a-z_]{1,16}", suffix in "[a-z]{1,6}") {
            let normalized = normalize_overload(&stem, &suffix, '_');
            prop_assert!(stem.starts_with(&normalized));
            prop_assert!(!normalized.is_empty());
        }
    }
}
