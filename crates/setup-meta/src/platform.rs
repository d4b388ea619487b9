//! Target platforms and the shells their scripts are written for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Operating system a generated script targets.
///
/// Identifiers follow Node's `process.platform` naming, which is what CI
/// runners report: `linux`, `darwin` and `win32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Ubuntu runners, packages from apt
    Linux,
    /// macOS runners, packages from pecl and Homebrew
    Darwin,
    /// Windows runners, PowerShell scripts
    Win32,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Darwin, Platform::Win32];

    /// The shell dialect scripts for this platform are written in.
    pub fn shell(&self) -> Shell {
        match self {
            Platform::Linux | Platform::Darwin => Shell::Bash,
            Platform::Win32 => Shell::PowerShell,
        }
    }

    /// The platform the current process runs on, if supported.
    pub fn host() -> Option<Platform> {
        match std::env::consts::OS {
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::Darwin),
            "windows" => Some(Platform::Win32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Win32 => "win32",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "darwin" => Ok(Platform::Darwin),
            "win32" => Ok(Platform::Win32),
            _ => Err(Error::UnsupportedPlatform {
                platform: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script dialect.
///
/// Messages about platforms outside [`Platform::ALL`] are rendered for
/// [`Shell::Bash`], the default dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shell {
    #[default]
    Bash,
    PowerShell,
}

impl Shell {
    /// Separator used when joining script directories with file names.
    pub fn path_separator(&self) -> char {
        match self {
            Shell::Bash => '/',
            Shell::PowerShell => '\\',
        }
    }

    /// Join a directory and a file name with this shell's separator.
    pub fn join_path(&self, dir: &str, file: &str) -> String {
        let sep = self.path_separator();
        let dir = dir.trim_end_matches(['/', '\\']);
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}{sep}{file}")
        }
    }
}
