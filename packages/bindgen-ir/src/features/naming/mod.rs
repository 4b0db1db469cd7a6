//! Naming helpers for emitters

mod enum_namer;
mod target_names;

pub use enum_namer::value_name_without_enum;
pub use target_names::{
    to_class_name, to_enum_value_name, to_lower_camel, to_method_name, to_upper_camel,
};
