//! Library convention configuration
//!
//! Everything the core needs to know about the wrapped library that is not
//! expressed by declaration annotations: naming prefixes, the distinguished
//! context and printer classes, the attribution override table and the
//! ownership convention for unannotated return values.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bindgen_ir::config::{InterfaceConfig, Preset};
//!
//! // Preset
//! let config = InterfaceConfig::preset(Preset::Isl);
//!
//! // YAML
//! let config = InterfaceConfig::from_yaml("mylib.yaml")?;
//! ```

pub mod error;
pub mod interface_config;
pub mod io;
pub mod preset;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use interface_config::{InterfaceConfig, ReturnOwnershipPolicy};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use validation::Validatable;
