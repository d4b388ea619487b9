//! Configuration types and loading for the setup script generator
//!
//! Configuration lives in a single TOML file (conventionally `setup.toml`):
//!
//! ```toml
//! [paths]
//! ini_file = "/etc/php/7.4/cli/php.ini"
//! scripts_dir = "/opt/setup-php/scripts/ext"
//!
//! [[extension]]
//! name = "relay"
//! platform = "linux"
//! versions = ">=7.4"
//! command = "curl -sSL https://example.test/relay.sh | bash"
//! ```
//!
//! Every field is optional; a missing file section falls back to the
//! platform defaults applied by [`ScriptContext`](crate::ScriptContext).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::version::VersionConstraint;

/// Upper bound on the size of a config file we are willing to parse.
pub const MAX_CONFIG_SIZE: u64 = 256 * 1024;

/// Root of `setup.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    /// Site-specific install commands, checked before the builtin policy
    #[serde(default, rename = "extension")]
    pub extensions: Vec<ExtensionOverride>,
}

/// Locations the generated script refers to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// php.ini the script appends directives to
    #[serde(default)]
    pub ini_file: Option<String>,
    /// PHP install root on Windows runners
    #[serde(default)]
    pub php_dir: Option<String>,
    /// Directory holding the auxiliary extension install scripts
    #[serde(default)]
    pub scripts_dir: Option<String>,
}

/// One `[[extension]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionOverride {
    pub name: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Version constraint such as `>=7.1,<8.0`; absent means every version
    #[serde(default)]
    pub versions: Option<String>,
    pub command: String,
}

impl ExtensionOverride {
    /// Parse the `versions` field, if any.
    pub fn constraint(&self) -> Result<Option<VersionConstraint>> {
        self.versions
            .as_deref()
            .map(VersionConstraint::parse)
            .transpose()
    }
}

impl SetupConfig {
    /// Parse config text. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: SetupConfig = toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        for ext in &self.extensions {
            if ext.name.trim().is_empty() {
                return Err(Error::InvalidConfig {
                    path: origin.to_path_buf(),
                    message: "extension override with an empty name".to_string(),
                });
            }
            if ext.command.trim().is_empty() {
                return Err(Error::InvalidConfig {
                    path: origin.to_path_buf(),
                    message: format!("extension override '{}' has an empty command", ext.name),
                });
            }
            ext.constraint().map_err(|e| Error::InvalidConfig {
                path: origin.to_path_buf(),
                message: format!("extension override '{}': {e}", ext.name),
            })?;
        }
        Ok(())
    }
}

/// Load `setup.toml` from `path`.
pub fn load_config(path: &Path) -> Result<SetupConfig> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let size = std::fs::metadata(path)?.len();
    if size > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_SIZE,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let config = SetupConfig::parse(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        overrides = config.extensions.len(),
        "Loaded setup config"
    );
    Ok(config)
}
