//! `setup-php extensions`

use std::path::Path;

use setup_script::ScriptFragment;

use super::{load_resolver, parse_version, target_platform};
use crate::cli::TargetArgs;
use crate::error::Result;

pub fn run_extensions(config: Option<&Path>, target: &TargetArgs, list: &str) -> Result<ScriptFragment> {
    let resolver = load_resolver(config)?;
    let version = parse_version(&target.php)?;
    let platform = target_platform(target.os.as_deref());

    Ok(resolver.resolve_text(list, &version, &platform, None))
}
