//! Per-invocation inputs threaded through every emitter.

use crate::config::PathsConfig;
use crate::platform::{Platform, Shell};
use crate::version::RuntimeVersion;

/// Shell variable the surrounding Bash script points at the loaded php.ini.
pub const DEFAULT_UNIX_INI_FILE: &str = "$ini_file";
pub const DEFAULT_WINDOWS_PHP_DIR: &str = r"C:\tools\php";
pub const DEFAULT_SCRIPTS_DIR: &str = "src/scripts/ext";

/// Everything an emitter needs besides the extension names themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    pub platform: Platform,
    pub version: RuntimeVersion,
    /// php.ini that directives are appended to and scrubbed from
    pub ini_file: String,
    /// PHP install root, used by the PowerShell module commands
    pub php_dir: String,
    /// Directory holding the auxiliary install scripts
    pub scripts_dir: String,
}

impl ScriptContext {
    /// Context with the platform defaults.
    pub fn new(platform: Platform, version: RuntimeVersion) -> Self {
        Self::with_paths(platform, version, &PathsConfig::default())
    }

    /// Context with configured paths, falling back to platform defaults.
    pub fn with_paths(platform: Platform, version: RuntimeVersion, paths: &PathsConfig) -> Self {
        let php_dir = paths
            .php_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_WINDOWS_PHP_DIR.to_string());
        let ini_file = paths.ini_file.clone().unwrap_or_else(|| match platform {
            Platform::Linux | Platform::Darwin => DEFAULT_UNIX_INI_FILE.to_string(),
            Platform::Win32 => Shell::PowerShell.join_path(&php_dir, "php.ini"),
        });
        let scripts_dir = paths
            .scripts_dir
            .clone()
            .unwrap_or_else(|| match platform.shell() {
                Shell::Bash => DEFAULT_SCRIPTS_DIR.to_string(),
                Shell::PowerShell => DEFAULT_SCRIPTS_DIR.replace('/', "\\"),
            });

        Self {
            platform,
            version,
            ini_file,
            php_dir,
            scripts_dir,
        }
    }

    pub fn shell(&self) -> Shell {
        self.platform.shell()
    }

    /// Full path of an auxiliary install script.
    pub fn script_path(&self, script: &str) -> String {
        self.shell().join_path(&self.scripts_dir, script)
    }
}
