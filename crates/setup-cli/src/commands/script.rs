//! `setup-php script` - extensions and coverage in one script.

use std::path::Path;
use std::str::FromStr;

use setup_coverage::{CoverageConfigurator, CoverageDriver};
use setup_extensions::ExtensionRequest;
use setup_meta::Platform;
use setup_script::{ScriptFragment, unsupported_platform};

use super::{load_resolver, parse_version, target_platform};
use crate::cli::TargetArgs;
use crate::error::Result;

pub fn run_script(
    config: Option<&Path>,
    target: &TargetArgs,
    extensions: Option<&str>,
    coverage: Option<&str>,
) -> Result<ScriptFragment> {
    let resolver = load_resolver(config)?;
    let version = parse_version(&target.php)?;
    let os = target_platform(target.os.as_deref());

    // One "not supported" line for the whole script, not one per step
    let Ok(platform) = Platform::from_str(&os) else {
        return Ok(ScriptFragment::line(unsupported_platform(&os)));
    };
    let ctx = resolver.context(platform, version);

    let mut script = ScriptFragment::new();
    if let Some(list) = extensions {
        script.append(resolver.resolve(&ExtensionRequest::parse(list), &ctx, None));
    }
    if let Some(driver) = coverage {
        match CoverageDriver::from_str(driver) {
            Ok(driver) => {
                let configurator = CoverageConfigurator::with_resolver(resolver);
                script.append(configurator.configure(driver, &ctx));
            }
            Err(e) => tracing::warn!("{e}; skipping coverage setup"),
        }
    }
    Ok(script)
}
