//! macOS: pecl by default, the shivammathur/extensions tap for brew rows.

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

    let directive = LoadDirective::for_extension(extension);
    let quiet = suppress_output(Shell::Bash);
    match strategy {
        ExtensionStrategy::Package => {
            format!("add_extension {extension} \"pecl_install {extension}{quiet}\" {directive}")
        }
        ExtensionStrategy::Brew => format!("add_brew_extension {extension} {directive}"),
        ExtensionStrategy::WithLibraries { libraries } => format!(
            "add_extension {extension} \"brew install {libraries}{quiet} && pecl_install {extension}{quiet}\" {directive}"
        ),
        ExtensionStrategy::PinnedRelease { release } => format!(
            "add_extension {extension} \"pecl_install {extension}-{release}{quiet}\" {directive}"
        ),
        ExtensionStrategy::XdebugRelease => format!(
            "add_extension {extension} \"pecl_install {extension}-{}{quiet}\" {directive}",
            xdebug_release(&ctx.version)
        ),
        ExtensionStrategy::Script { script, pass_name } => {
            run_script(ctx, extension, script, *pass_name)
        }
        ExtensionStrategy::Unsupported { requirement } => unsupported(ctx, extension, requirement),
        ExtensionStrategy::Custom { command } => command.clone(),
    }
}
