//! Debian/Ubuntu: apt packages from the ondrej PPA, pecl otherwise.

use setup_meta::{ScriptContext, Shell};
use setup_script::suppress_output;

use super::{Installation, pecl_extension, run_script, unstable_extension, unsupported};
use crate::policy::{ExtensionStrategy, LoadDirective};
use crate::xdebug::xdebug_release;

pub(super) fn emit(ctx: &ScriptContext, extension: &str, installation: Installation<'_>) -> String {
    let strategy = match installation {
        Installation::Strategy(strategy) => strategy,
        Installation::Unstable(channel) => return unstable_extension(extension, channel),
        Installation::Release(release) => return pecl_extension(extension, release),
    };

    match strategy {
        // apt resolves library dependencies itself; brew rows don't apply here
        ExtensionStrategy::Package
        | ExtensionStrategy::Brew
        | ExtensionStrategy::WithLibraries { .. } => apt_install(ctx, extension),
        ExtensionStrategy::PinnedRelease { release } => pecl_extension(extension, release),
        ExtensionStrategy::XdebugRelease => {
            pecl_extension(extension, xdebug_release(&ctx.version))
        }
        ExtensionStrategy::Script { script, pass_name } => {
            run_script(ctx, extension, script, *pass_name)
        }
        ExtensionStrategy::Unsupported { requirement } => unsupported(ctx, extension, requirement),
        ExtensionStrategy::Custom { command } => command.clone(),
    }
}

/// `php<v>-<pkg>` where the package drops any `pdo_`/`pdo-` prefix.
fn apt_install(ctx: &ScriptContext, extension: &str) -> String {
    let package = extension
        .strip_prefix("pdo_")
        .or_else(|| extension.strip_prefix("pdo-"))
        .unwrap_or(extension);
    format!(
        "add_extension {extension} \"sudo $debconf_fix apt-get install -y php{}-{package}{}\" {}",
        ctx.version,
        suppress_output(Shell::Bash),
        LoadDirective::for_extension(extension)
    )
}
