//! Policy registry storage

use setup_meta::{ExtensionOverride, Platform, RuntimeVersion};

use super::{Alias, ExtensionStrategy, PolicyEntry, VersionGate};

/// Lookup over policy rows and aliases.
///
/// Config overrides are kept apart from the builtin rows and always
/// consulted first.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    overrides: Vec<PolicyEntry>,
    entries: Vec<PolicyEntry>,
    aliases: Vec<Alias>,
}

impl PolicyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the builtin tables.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for entry in super::builtins::builtin_policies() {
            registry.register(entry);
        }
        for alias in super::builtins::builtin_aliases() {
            registry.register_alias(alias);
        }
        registry
    }

    /// Append a policy row. Earlier rows win.
    pub fn register(&mut self, entry: PolicyEntry) {
        self.entries.push(entry);
    }

    pub fn register_alias(&mut self, alias: Alias) {
        self.aliases.push(alias);
    }

    /// Add a `[[extension]]` override from `setup.toml`.
    pub fn register_override(&mut self, ext: &ExtensionOverride) -> setup_meta::Result<()> {
        let versions = match ext.constraint()? {
            Some(constraint) => VersionGate::Constraint(constraint),
            None => VersionGate::Range(setup_meta::VersionRange::any()),
        };
        self.overrides.push(PolicyEntry {
            extension: ext.name.trim().to_lowercase(),
            platform: ext.platform,
            versions,
            strategy: ExtensionStrategy::Custom {
                command: ext.command.clone(),
            },
        });
        Ok(())
    }

    /// Strategy for a canonical package, if any row matches.
    pub fn lookup(
        &self,
        extension: &str,
        platform: Platform,
        version: &RuntimeVersion,
    ) -> Option<&ExtensionStrategy> {
        self.overrides
            .iter()
            .chain(&self.entries)
            .find(|e| e.matches(extension, platform, version))
            .map(|e| &e.strategy)
    }

    /// Strategy from a config override alone.
    ///
    /// Checked against the name as requested, so an override can replace
    /// an alias such as `sqlite` as a whole.
    pub fn lookup_override(
        &self,
        extension: &str,
        platform: Platform,
        version: &RuntimeVersion,
    ) -> Option<&ExtensionStrategy> {
        self.overrides
            .iter()
            .find(|e| e.matches(extension, platform, version))
            .map(|e| &e.strategy)
    }

    /// Rewrite a requested name into the canonical packages to install.
    ///
    /// Names without an alias map to themselves.
    pub fn expand(&self, name: &str, platform: Platform, version: &RuntimeVersion) -> Vec<String> {
        match self.aliases.iter().find(|a| a.applies(name, platform)) {
            Some(alias) => alias.expand(version),
            None => vec![name.to_string()],
        }
    }

    /// Number of policy rows, overrides included.
    pub fn len(&self) -> usize {
        self.overrides.len() + self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.aliases.is_empty()
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Names with a dedicated policy or alias on `platform` (sorted).
    pub fn for_platform(&self, platform: Platform) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .overrides
            .iter()
            .chain(&self.entries)
            .filter(|e| e.platform.is_none_or(|p| p == platform))
            .map(|e| e.extension.as_str())
            .chain(
                self.aliases
                    .iter()
                    .filter(|a| a.platform.is_none_or(|p| p == platform))
                    .map(|a| a.name.as_str()),
            )
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
