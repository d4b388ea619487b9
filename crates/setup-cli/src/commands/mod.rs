//! Command implementations for setup-cli

pub mod coverage;
pub mod extensions;
pub mod list;
pub mod script;

pub use coverage::run_coverage;
pub use extensions::run_extensions;
pub use list::run_list_extensions;
pub use script::run_script;

use std::path::Path;

use setup_extensions::ExtensionResolver;
use setup_meta::{Platform, RuntimeVersion, load_config};

use crate::error::Result;

/// Resolver over the builtin tables, plus `setup.toml` when given.
pub fn load_resolver(config: Option<&Path>) -> Result<ExtensionResolver> {
    match config {
        Some(path) => {
            let config = load_config(path)?;
            Ok(ExtensionResolver::from_config(&config)?)
        }
        None => Ok(ExtensionResolver::new()),
    }
}

/// Parse `--php`; an invalid version is a hard error at this edge.
pub fn parse_version(php: &str) -> Result<RuntimeVersion> {
    Ok(RuntimeVersion::parse(php)?)
}

/// The `--os` value, or the host platform when omitted.
///
/// Left as text: an unknown platform is reported inside the script.
pub fn target_platform(os: Option<&str>) -> String {
    match os {
        Some(os) => os.to_string(),
        None => Platform::host()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| std::env::consts::OS.to_string()),
    }
}
