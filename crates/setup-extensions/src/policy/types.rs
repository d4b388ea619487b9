//! Core types for the policy tables

use std::fmt;

use setup_meta::{Platform, RuntimeVersion, VersionConstraint, VersionRange};

use crate::request::Channel;

/// Extensions PHP must load with `zend_extension=` rather than `extension=`.
const ZEND_EXTENSIONS: [&str; 3] = ["xdebug", "opcache", "ioncube"];

/// php.ini directive an extension is loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadDirective {
    Extension,
    ZendExtension,
}

impl LoadDirective {
    pub fn for_extension(name: &str) -> Self {
        if ZEND_EXTENSIONS.contains(&name) {
            LoadDirective::ZendExtension
        } else {
            LoadDirective::Extension
        }
    }

    /// Directive for a channel build. Alpha builds always load as zend
    /// extensions.
    pub fn for_channel(name: &str, channel: Channel) -> Self {
        match channel {
            Channel::Alpha => LoadDirective::ZendExtension,
            _ => Self::for_extension(name),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadDirective::Extension => "extension",
            LoadDirective::ZendExtension => "zend_extension",
        }
    }
}

impl fmt::Display for LoadDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an extension gets onto the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionStrategy {
    /// The platform's native channel: apt on linux, pecl on darwin,
    /// `Add-Extension` on win32. Also the fallback for unlisted names.
    Package,
    /// Homebrew tap formula (darwin only; elsewhere same as `Package`)
    Brew,
    /// Native libraries from brew first, then the extension from pecl
    WithLibraries { libraries: String },
    /// Auxiliary script compiling against the runtime's ABI. The script
    /// receives the version, preceded by the extension name when `pass_name`.
    Script { script: String, pass_name: bool },
    /// A fixed pecl release
    PinnedRelease { release: String },
    /// pecl release chosen from the Xdebug compatibility table
    XdebugRelease,
    /// Cannot be installed here; emits a failure log line
    Unsupported { requirement: String },
    /// Verbatim command from `setup.toml`
    Custom { command: String },
}

impl ExtensionStrategy {
    pub fn with_libraries(libraries: impl Into<String>) -> Self {
        ExtensionStrategy::WithLibraries {
            libraries: libraries.into(),
        }
    }

    pub fn script(script: impl Into<String>, pass_name: bool) -> Self {
        ExtensionStrategy::Script {
            script: script.into(),
            pass_name,
        }
    }

    pub fn pinned(release: impl Into<String>) -> Self {
        ExtensionStrategy::PinnedRelease {
            release: release.into(),
        }
    }

    pub fn unsupported(requirement: impl Into<String>) -> Self {
        ExtensionStrategy::Unsupported {
            requirement: requirement.into(),
        }
    }
}

/// Version condition of a policy entry.
#[derive(Debug, Clone)]
pub enum VersionGate {
    /// Builtin tables use constant ranges
    Range(VersionRange),
    /// Config overrides use parsed constraints
    Constraint(VersionConstraint),
}

impl VersionGate {
    pub fn admits(&self, version: &RuntimeVersion) -> bool {
        match self {
            VersionGate::Range(range) => range.contains(version),
            VersionGate::Constraint(constraint) => constraint.matches(version),
        }
    }
}

impl From<VersionRange> for VersionGate {
    fn from(range: VersionRange) -> Self {
        VersionGate::Range(range)
    }
}

impl fmt::Display for VersionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionGate::Range(range) => fmt::Display::fmt(range, f),
            VersionGate::Constraint(constraint) => fmt::Display::fmt(constraint, f),
        }
    }
}

/// One row of the policy table.
#[derive(Debug, Clone)]
pub struct PolicyEntry {
    /// Normalized extension name
    pub extension: String,
    /// `None` applies to every platform
    pub platform: Option<Platform>,
    pub versions: VersionGate,
    pub strategy: ExtensionStrategy,
}

impl PolicyEntry {
    pub fn new(
        extension: impl Into<String>,
        platform: Platform,
        versions: impl Into<VersionGate>,
        strategy: ExtensionStrategy,
    ) -> Self {
        Self {
            extension: extension.into(),
            platform: Some(platform),
            versions: versions.into(),
            strategy,
        }
    }

    /// An entry that applies on every platform.
    pub fn everywhere(
        extension: impl Into<String>,
        versions: impl Into<VersionGate>,
        strategy: ExtensionStrategy,
    ) -> Self {
        Self {
            extension: extension.into(),
            platform: None,
            versions: versions.into(),
            strategy,
        }
    }

    pub fn matches(&self, extension: &str, platform: Platform, version: &RuntimeVersion) -> bool {
        self.extension == extension
            && self.platform.is_none_or(|p| p == platform)
            && self.versions.admits(version)
    }
}

/// A package an alias expands to, present only within `versions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTarget {
    pub package: String,
    pub versions: VersionRange,
}

impl AliasTarget {
    pub fn new(package: impl Into<String>, versions: VersionRange) -> Self {
        Self {
            package: package.into(),
            versions,
        }
    }

    pub fn always(package: impl Into<String>) -> Self {
        Self::new(package, VersionRange::any())
    }
}

/// A requested name rewritten to one or more canonical packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    /// `None` applies to every platform
    pub platform: Option<Platform>,
    pub targets: Vec<AliasTarget>,
}

impl Alias {
    pub fn new(name: impl Into<String>, platform: Option<Platform>, targets: Vec<AliasTarget>) -> Self {
        Self {
            name: name.into(),
            platform,
            targets,
        }
    }

    pub fn applies(&self, name: &str, platform: Platform) -> bool {
        self.name == name && self.platform.is_none_or(|p| p == platform)
    }

    /// Packages this alias yields for `version`, in declaration order.
    pub fn expand(&self, version: &RuntimeVersion) -> Vec<String> {
        self.targets
            .iter()
            .filter(|t| t.versions.contains(version))
            .map(|t| t.package.clone())
            .collect()
    }
}
