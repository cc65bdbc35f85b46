//! Configuration System
//!
//! Versioned YAML configuration with range validation:
//!
//! ```rust,ignore
//! use kingraph_core::config::KinshipConfig;
//!
//! // Defaults (no file)
//! let config = KinshipConfig::default();
//!
//! // From YAML (must carry `version: 1`)
//! let config = KinshipConfig::from_yaml("kingraph.yaml")?;
//! ```
//!
//! Sections:
//! - `layout`: rank hints passed through to the layout engine (DOT export)
//! - `loader`: reference-cleanup policy

pub mod error;
pub mod io;
pub mod layout;
pub mod loader;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, KinshipConfig, SUPPORTED_VERSIONS};
pub use layout::{LayoutConfig, RankDir};
pub use loader::LoaderConfig;
