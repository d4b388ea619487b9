//! Script building blocks shared by the resolver and the coverage configurator.
//!
//! Nothing here decides *what* to install. This crate only knows how a line
//! looks in each shell dialect:
//!
//! - [`ScriptFragment`] - ordered command lines, rendered newline-terminated
//! - [`log`] - the logging collaborator (`echo` / `Write-Host` status lines)
//! - [`ini`] - the config collaborator appending php.ini directives

pub mod fragment;
pub mod ini;
pub mod log;

pub use fragment::ScriptFragment;
pub use ini::add_ini_values;
pub use log::{LogLevel, Mark, add_log, log, step_log, suppress_output, unsupported_platform};
