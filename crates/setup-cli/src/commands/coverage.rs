//! `setup-php coverage`

use std::path::Path;

use setup_coverage::CoverageConfigurator;
use setup_script::ScriptFragment;

use super::{load_resolver, parse_version, target_platform};
use crate::cli::TargetArgs;
use crate::error::Result;

/// An unrecognised driver produces an empty script, not an error.
pub fn run_coverage(config: Option<&Path>, target: &TargetArgs, driver: &str) -> Result<ScriptFragment> {
    let configurator = CoverageConfigurator::with_resolver(load_resolver(config)?);
    let version = parse_version(&target.php)?;
    let platform = target_platform(target.os.as_deref());

    Ok(configurator.configure_text(driver, &version, &platform))
}
