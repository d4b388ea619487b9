//! Shared vocabulary for the PHP setup script generator.
//!
//! This crate holds the types every other crate in the workspace speaks:
//! target platforms and their shells, runtime versions and version ranges,
//! and the TOML configuration that supplies script paths and extension
//! overrides.

pub mod config;
pub mod context;
pub mod error;
pub mod platform;
pub mod version;

pub use config::{ExtensionOverride, PathsConfig, SetupConfig, load_config};
pub use context::ScriptContext;
pub use error::{Error, Result};
pub use platform::{Platform, Shell};
pub use version::{RuntimeVersion, VersionConstraint, VersionRange};
