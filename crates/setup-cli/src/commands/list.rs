//! `setup-php list-extensions`

use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;

use colored::Colorize;
use setup_meta::Platform;

use super::load_resolver;
use crate::error::Result;

/// Names with a dedicated policy row or alias, grouped by platform.
///
/// Anything not listed still installs through the platform's package
/// manager.
pub fn run_list_extensions(config: Option<&Path>, os: Option<&str>) -> Result<String> {
    let resolver = load_resolver(config)?;
    let platforms = match os {
        Some(os) => vec![Platform::from_str(os)?],
        None => Platform::ALL.to_vec(),
    };

    let mut out = String::new();
    for platform in platforms {
        let names = resolver.registry().for_platform(platform);
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} ({})", platform.as_str().bold(), names.len());
        for name in names {
            let _ = writeln!(out, "  {name}");
        }
    }
    Ok(out)
}
