/*
 * Bindgen IR - Binding model for annotated C libraries
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Declaration model (types, functions, enums, annotations)
 * - config/      : Library conventions (prefixes, context/printer classes, overrides)
 * - features/    : registry → classification → subclass → dependencies, naming
 * - pipeline/    : Orchestration into a frozen InterfaceModel
 *
 * Emitters only ever read the InterfaceModel; nothing here writes files.
 */

#![allow(clippy::should_implement_trait)] // Preset::from_str naming intentional
#![allow(clippy::new_without_default)] // Builders always take a config
#![allow(clippy::module_inception)] // registry::domain::registry

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Library convention configuration
pub mod config;

/// Error types
pub mod errors;

/// Feature slices
pub mod features;

/// Orchestration
pub mod pipeline;

/// Declaration model and diagnostics
pub mod shared;

pub use config::{InterfaceConfig, Preset, ReturnOwnershipPolicy};
pub use errors::{BindgenError, Result};
pub use features::dependencies::{Dependency, DependencyContext, DependencyKind, DependencySet};
pub use features::registry::{ClassModel, EnumModel};
pub use pipeline::{BuildOutput, InterfaceBuilder, InterfaceModel};
pub use shared::models::{DeclarationSet, Diagnostic, DiagnosticKind, Diagnostics};
