//! Coverage configurator.
//!
//! Exactly one of Xdebug and PCOV may be active. Enabling PCOV therefore
//! disables Xdebug after installing PCOV, and `none` disables both.

use std::str::FromStr;

use setup_extensions::{ExtensionRequest, ExtensionResolver};
use setup_meta::{Platform, RuntimeVersion, ScriptContext};
use setup_script::{LogLevel, ScriptFragment, add_ini_values, log, step_log, unsupported_platform};

use crate::disable::{disable_module, scrub_config};
use crate::driver::CoverageDriver;

/// Step name shared by every coverage fragment and its log lines.
pub const COVERAGE_STEP_LABEL: &str = "Set Coverage Driver";

/// Oldest runtime PCOV builds against.
const PCOV_MINIMUM: (u64, u64) = (7, 1);

pub struct CoverageConfigurator {
    resolver: ExtensionResolver,
}

impl CoverageConfigurator {
    pub fn new() -> Self {
        Self::with_resolver(ExtensionResolver::new())
    }

    /// Use a resolver carrying config overrides and paths.
    pub fn with_resolver(resolver: ExtensionResolver) -> Self {
        Self { resolver }
    }

    /// Script fragment enabling `driver` and disabling the other one.
    pub fn configure(&self, driver: CoverageDriver, ctx: &ScriptContext) -> ScriptFragment {
        tracing::debug!(%driver, platform = %ctx.platform, version = %ctx.version, "Configuring coverage");
        match driver {
            CoverageDriver::Xdebug => self.enable_xdebug(ctx),
            CoverageDriver::Pcov => self.enable_pcov(ctx),
            CoverageDriver::None => disable_all(ctx),
        }
    }

    /// Text entry point.
    ///
    /// An unrecognised driver yields an empty fragment. A recognised driver
    /// on an unrecognised platform yields the single "not supported" line.
    pub fn configure_text(
        &self,
        driver: &str,
        version: &RuntimeVersion,
        platform: &str,
    ) -> ScriptFragment {
        let driver = match CoverageDriver::from_str(driver) {
            Ok(driver) => driver,
            Err(e) => {
                tracing::debug!("{e}; skipping coverage setup");
                return ScriptFragment::new();
            }
        };
        let Ok(platform) = Platform::from_str(platform) else {
            return ScriptFragment::line(unsupported_platform(platform));
        };
        let ctx = self.resolver.context(platform, version.clone());
        self.configure(driver, &ctx)
    }

    fn install(&self, extension: &str, ctx: &ScriptContext) -> ScriptFragment {
        self.resolver
            .resolve(&ExtensionRequest::parse(extension), ctx, Some(COVERAGE_STEP_LABEL))
    }

    fn enable_xdebug(&self, ctx: &ScriptContext) -> ScriptFragment {
        let mut fragment = self.install("xdebug", ctx);
        fragment.push(notice("Xdebug enabled as coverage driver", LogLevel::Success, ctx));
        fragment
    }

    fn enable_pcov(&self, ctx: &ScriptContext) -> ScriptFragment {
        let (major, minor) = PCOV_MINIMUM;
        if !ctx.version.at_least(major, minor) {
            tracing::warn!(version = %ctx.version, "PCOV is not available for this runtime");
            return ScriptFragment::from_iter([
                step_log(COVERAGE_STEP_LABEL, ctx.shell()),
                notice("PCOV requires PHP 7.1 or newer", LogLevel::Warning, ctx),
            ]);
        }

        let mut fragment = self.install("pcov", ctx);
        fragment.append(add_ini_values("pcov.enabled=1", ctx));
        fragment.extend(disable_module(ctx, "xdebug"));
        fragment.extend(scrub_config(ctx, "xdebug"));
        fragment.push(notice("PCOV enabled as coverage driver", LogLevel::Success, ctx));
        fragment
    }
}

impl Default for CoverageConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

fn disable_all(ctx: &ScriptContext) -> ScriptFragment {
    let drivers = ["xdebug", "pcov"];
    let mut fragment = ScriptFragment::line(step_log(COVERAGE_STEP_LABEL, ctx.shell()));
    fragment.extend(drivers.iter().filter_map(|ext| disable_module(ctx, ext)));
    fragment.extend(drivers.iter().filter_map(|ext| scrub_config(ctx, ext)));
    fragment.push(notice("Disabled Xdebug and PCOV", LogLevel::Success, ctx));
    fragment
}

fn notice(message: &str, level: LogLevel, ctx: &ScriptContext) -> String {
    log(message, ctx.shell(), level, COVERAGE_STEP_LABEL)
}

/// Configure `driver` with the builtin tables and default paths.
pub fn configure(driver: &str, version: &RuntimeVersion, platform: &str) -> ScriptFragment {
    CoverageConfigurator::new().configure_text(driver, version, platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn php(v: &str) -> RuntimeVersion {
        RuntimeVersion::parse(v).unwrap()
    }

    #[test]
    fn test_unknown_driver_is_silent() {
        assert!(configure("phpdbg", &php("7.4"), "linux").is_empty());
        assert!(configure("", &php("7.4"), "fedora").is_empty());
    }

    #[test]
    fn test_driver_is_case_insensitive() {
        let script = configure("PCOV", &php("7.4"), "linux");
        assert!(script.contains("php7.4-pcov"));
    }

    #[test]
    fn test_unsupported_platform_single_line() {
        let script = configure("xdebug", &php("7.4"), "fedora");
        assert_eq!(script.len(), 1);
        assert!(script.contains("Platform fedora is not supported"));
    }

    #[test]
    fn test_single_step_header() {
        for driver in CoverageDriver::ALL {
            let script = configure(driver.as_str(), &php("7.4"), "darwin");
            assert_eq!(
                script.lines().iter().filter(|l| l.starts_with("step_log")).count(),
                1,
                "{driver}"
            );
            assert_eq!(script.lines()[0], r#"step_log "Set Coverage Driver""#);
        }
    }

    #[test]
    fn test_pcov_boundary() {
        assert!(configure("pcov", &php("7.0"), "linux").contains("PCOV requires PHP 7.1 or newer"));
        assert!(configure("pcov", &php("7.1"), "linux").contains("PCOV enabled as coverage driver"));
    }
}
