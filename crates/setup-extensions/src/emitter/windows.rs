//! Windows: `Add-Extension` fetches prebuilt DLLs from PECL.

use setup_meta::ScriptContext;

use super::{Installation, run_script, unsupported};
use crate::policy::ExtensionStrategy;
use crate::request::{Channel, split_release};
use crate::xdebug::xdebug_release;

pub(super) fn emit(ctx: &ScriptContext, extension: &str, installation: Installation<'_>) -> String {
    let strategy = match installation {
        Installation::Strategy(strategy) => strategy,
        Installation::Unstable(channel) => return format!("Add-Extension {extension} {channel}"),
        Installation::Release(release) => return release_line(extension, release),
    };

    match strategy {
        ExtensionStrategy::Package
        | ExtensionStrategy::Brew
        | ExtensionStrategy::WithLibraries { .. } => format!("Add-Extension {extension}"),
        ExtensionStrategy::PinnedRelease { release } => {
            format!("Add-Extension {extension} {} {release}", Channel::Stable)
        }
        ExtensionStrategy::XdebugRelease => format!(
            "Add-Extension {extension} {} {}",
            Channel::Stable,
            xdebug_release(&ctx.version)
        ),
        ExtensionStrategy::Script { script, pass_name } => {
            run_script(ctx, extension, script, *pass_name)
        }
        ExtensionStrategy::Unsupported { requirement } => unsupported(ctx, extension, requirement),
        ExtensionStrategy::Custom { command } => command.clone(),
    }
}

/// PECL names its `preview` state `devel`.
fn release_line(extension: &str, release: &str) -> String {
    let (number, state) = split_release(release);
    let state = match state {
        None => Channel::Stable.as_str(),
        Some("preview") => Channel::Devel.as_str(),
        Some(other) => other,
    };
    format!("Add-Extension {extension} {state} {number}")
}
