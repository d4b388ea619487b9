//! Extension resolver - request in, install commands out.

use std::str::FromStr;

use setup_meta::{PathsConfig, Platform, RuntimeVersion, ScriptContext, SetupConfig};
use setup_script::{ScriptFragment, step_log, unsupported_platform};

use crate::emitter::{self, Installation};
use crate::policy::{ExtensionStrategy, PolicyRegistry};
use crate::request::{ExtensionRequest, ExtensionToken};

/// Step header used when the caller does not name the step.
pub const DEFAULT_STEP_LABEL: &str = "Setup Extensions";

/// Strategy for names without a policy row.
static FALLBACK: ExtensionStrategy = ExtensionStrategy::Package;

/// Resolves extension requests against a [`PolicyRegistry`].
///
/// Resolution is infallible: every token yields exactly the lines its
/// strategy emits, and unknown names fall back to the platform's package
/// manager.
#[derive(Debug, Clone)]
pub struct ExtensionResolver {
    registry: PolicyRegistry,
    paths: PathsConfig,
}

impl ExtensionResolver {
    /// Resolver over the builtin tables with default paths.
    pub fn new() -> Self {
        Self::with_registry(PolicyRegistry::with_builtins())
    }

    pub fn with_registry(registry: PolicyRegistry) -> Self {
        Self {
            registry,
            paths: PathsConfig::default(),
        }
    }

    /// Builtin tables plus the overrides and paths from `setup.toml`.
    pub fn from_config(config: &SetupConfig) -> setup_meta::Result<Self> {
        let mut registry = PolicyRegistry::with_builtins();
        for ext in &config.extensions {
            registry.register_override(ext)?;
        }
        tracing::debug!(
            rules = registry.len(),
            overrides = registry.override_count(),
            "Loaded extension overrides"
        );
        Ok(Self {
            registry,
            paths: config.paths.clone(),
        })
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Script context for `platform` and `version` using the configured paths.
    pub fn context(&self, platform: Platform, version: RuntimeVersion) -> ScriptContext {
        ScriptContext::with_paths(platform, version, &self.paths)
    }

    /// Emit the install commands for `request`.
    ///
    /// The fragment opens with a step header naming `step_label`, or
    /// [`DEFAULT_STEP_LABEL`] when absent.
    pub fn resolve(
        &self,
        request: &ExtensionRequest,
        ctx: &ScriptContext,
        step_label: Option<&str>,
    ) -> ScriptFragment {
        let mut fragment =
            ScriptFragment::line(step_log(step_label.unwrap_or(DEFAULT_STEP_LABEL), ctx.shell()));
        for token in request.tokens() {
            self.resolve_token(token, ctx, &mut fragment);
        }
        fragment
    }

    /// Text entry point: parse the list and the platform identifier.
    ///
    /// An unrecognised platform short-circuits to a single "not supported"
    /// line, whatever the list contains.
    pub fn resolve_text(
        &self,
        list: &str,
        version: &RuntimeVersion,
        platform: &str,
        step_label: Option<&str>,
    ) -> ScriptFragment {
        let Ok(platform) = Platform::from_str(platform) else {
            return ScriptFragment::line(unsupported_platform(platform));
        };
        let ctx = self.context(platform, version.clone());
        self.resolve(&ExtensionRequest::parse(list), &ctx, step_label)
    }

    fn resolve_token(&self, token: &ExtensionToken, ctx: &ScriptContext, out: &mut ScriptFragment) {
        if let Some(channel) = token.channel {
            tracing::debug!(extension = %token.name, %channel, "Resolved unstable extension");
            out.push(emitter::emit(ctx, &token.name, Installation::Unstable(channel)));
            return;
        }
        if let Some(release) = &token.release {
            tracing::debug!(extension = %token.name, %release, "Resolved explicit release");
            out.push(emitter::emit(ctx, &token.name, Installation::Release(release)));
            return;
        }

        let requested = self
            .registry
            .lookup_override(&token.name, ctx.platform, &ctx.version);
        if let Some(strategy) = requested {
            tracing::debug!(extension = %token.name, "Resolved extension from config override");
            out.push(emitter::emit(ctx, &token.name, Installation::Strategy(strategy)));
            return;
        }

        for package in self.registry.expand(&token.name, ctx.platform, &ctx.version) {
            let strategy = match self.registry.lookup(&package, ctx.platform, &ctx.version) {
                Some(strategy) => strategy,
                None => &FALLBACK,
            };
            tracing::debug!(
                requested = %token.name,
                extension = %package,
                platform = %ctx.platform,
                version = %ctx.version,
                ?strategy,
                "Resolved extension"
            );
            out.push(emitter::emit(ctx, &package, Installation::Strategy(strategy)));
        }
    }
}

impl Default for ExtensionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `list` with the builtin tables and default paths.
pub fn resolve(
    list: &str,
    version: &RuntimeVersion,
    platform: &str,
    step_label: Option<&str>,
) -> ScriptFragment {
    ExtensionResolver::new().resolve_text(list, version, platform, step_label)
}
