//! Platform command emitters.
//!
//! Each platform module renders an [`Installation`] as one command line in
//! its shell's dialect. The functions called here (`add_extension`,
//! `add_brew_extension`, `Add-Extension`, ...) are defined by the script the
//! output is spliced into.

mod darwin;
mod linux;
mod windows;

use setup_meta::{Platform, ScriptContext, Shell};
use setup_script::{Mark, add_log};

use crate::policy::{ExtensionStrategy, LoadDirective};
use crate::request::Channel;

/// What to install for one canonical extension name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation<'a> {
    /// The strategy from the policy table (or the `Package` fallback)
    Strategy(&'a ExtensionStrategy),
    /// Build from a release channel, bypassing the policy table
    Unstable(Channel),
    /// A specific pecl release such as `2.9.8` or `5.8.0rc1`
    Release(&'a str),
}

/// Render the install command for `extension` on the context's platform.
pub fn emit(ctx: &ScriptContext, extension: &str, installation: Installation<'_>) -> String {
    match ctx.platform {
        Platform::Linux => linux::emit(ctx, extension, installation),
        Platform::Darwin => darwin::emit(ctx, extension, installation),
        Platform::Win32 => windows::emit(ctx, extension, installation),
    }
}

// Lines rendered the same way on linux and darwin.

fn unstable_extension(extension: &str, channel: Channel) -> String {
    let directive = LoadDirective::for_channel(extension, channel);
    format!("add_unstable_extension {extension} {channel} {directive}")
}

fn pecl_extension(extension: &str, release: &str) -> String {
    let directive = LoadDirective::for_extension(extension);
    format!("add_pecl_extension {extension} {release} {directive}")
}

// Lines whose shape only differs by shell.

/// Run an auxiliary install script with the runtime version.
fn run_script(ctx: &ScriptContext, extension: &str, script: &str, pass_name: bool) -> String {
    let invoke = match ctx.shell() {
        Shell::Bash => "sh",
        Shell::PowerShell => "&",
    };
    let path = ctx.script_path(script);
    if pass_name {
        format!("{invoke} {path} {extension} {}", ctx.version)
    } else {
        format!("{invoke} {path} {}", ctx.version)
    }
}

fn unsupported(ctx: &ScriptContext, extension: &str, requirement: &str) -> String {
    add_log(Mark::Cross, extension, requirement, ctx.shell())
}
