//! Declaration fixtures
//!
//! Small libraries shaped like the real thing: a toy `widget` library under
//! the custom preset and an isl-flavoured one under the isl preset.

use bindgen_ir::config::{InterfaceConfig, Preset};
use bindgen_ir::shared::models::{Annotation, CType, DeclarationSet, FunctionDeclaration};

use super::builders::*;

pub fn custom_config() -> InterfaceConfig {
    InterfaceConfig::preset(Preset::Custom)
}

pub fn isl_config() -> InterfaceConfig {
    InterfaceConfig::preset(Preset::Isl)
}

/// `widget_create`, the `area` overload pair and a `point` destructor
pub fn fixture_widget_library() -> DeclarationSet {
    DeclarationSetBuilder::new()
        .class("ctx")
        .class("widget")
        .class("point")
        .function(
            FunctionDeclaration::new("widget_create", obj("widget"))
                .with_annotation(Annotation::Constructor)
                .with_annotation(Annotation::Give)
                .with_param(param("ctx", obj("ctx"))),
        )
        .function(
            FunctionDeclaration::new("widget_area", CType::builtin("int"))
                .with_annotation(Annotation::Overload)
                .with_param(kept("w", "widget"))
                .with_param(param("n", CType::builtin("int"))),
        )
        .function(
            FunctionDeclaration::new("widget_area_point", CType::builtin("int"))
                .with_annotation(Annotation::Overload)
                .with_param(kept("w", "widget"))
                .with_param(kept("p", "point")),
        )
        .destructor("point")
        .build()
}

/// Sets, unions of sets, a printer and the `isl_dim_type` enum
pub fn fixture_isl_library() -> DeclarationSet {
    let point_callback = CType::pointer(CType::function(
        vec![obj("isl_point"), user_pointer()],
        CType::builtin("int"),
    ));

    DeclarationSetBuilder::new()
        .class("isl_ctx")
        .class("isl_printer")
        .class("isl_union_set")
        .subclass("isl_set", &["isl_union_set"])
        .subclass("isl_basic_set", &["isl_set"])
        .class("isl_point")
        .class("isl_val")
        .function(
            FunctionDeclaration::new("isl_set_read_from_str", obj("isl_set"))
                .with_annotation(Annotation::Constructor)
                .with_annotation(Annotation::Give)
                .with_param(param("ctx", obj("isl_ctx")))
                .with_param(param("str", c_string())),
        )
        .function(
            FunctionDeclaration::new("isl_set_copy", obj("isl_set"))
                .with_annotation(Annotation::Give)
                .with_param(kept("set", "isl_set")),
        )
        .function(
            FunctionDeclaration::new("isl_set_union", obj("isl_set"))
                .with_annotation(Annotation::Give)
                .with_param(taken("set1", "isl_set"))
                .with_param(taken("set2", "isl_set")),
        )
        .function(
            FunctionDeclaration::new("isl_set_is_empty", CType::builtin("int"))
                .with_annotation(Annotation::ReturnsBool)
                .with_param(kept("set", "isl_set")),
        )
        .function(
            FunctionDeclaration::new("isl_set_dim", CType::builtin("unsigned int"))
                .with_param(kept("set", "isl_set"))
                .with_param(param("type", CType::enumeration("isl_dim_type"))),
        )
        .function(
            FunctionDeclaration::new("isl_set_foreach_point", CType::builtin("int"))
                .with_param(kept("set", "isl_set"))
                .with_param(param("fn", point_callback))
                .with_param(param("user", user_pointer())),
        )
        .function(
            FunctionDeclaration::new("isl_set_max_val", obj("isl_val"))
                .with_annotation(Annotation::Give)
                .with_param(kept("set", "isl_set")),
        )
        .destructor("isl_set")
        .destructor("isl_basic_set")
        .destructor("isl_union_set")
        .destructor("isl_point")
        .destructor("isl_val")
        .function(
            FunctionDeclaration::new("isl_printer_print_set", obj("isl_printer"))
                .with_annotation(Annotation::Give)
                .with_param(taken("p", "isl_printer"))
                .with_param(kept("set", "isl_set")),
        )
        .function(
            FunctionDeclaration::new("isl_options_set_on_error", CType::builtin("int"))
                .with_param(param("ctx", obj("isl_ctx")))
                .with_param(param("val", CType::builtin("int"))),
        )
        .enumeration(
            "isl_dim_type",
            &[
                ("isl_dim_cst", 0),
                ("isl_dim_param", 1),
                ("isl_dim_in", 2),
                ("isl_dim_out", 3),
                ("isl_dim_all", 5),
            ],
        )
        .build()
}
