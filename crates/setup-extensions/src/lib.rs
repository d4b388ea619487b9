//! Extension resolution for the PHP setup script generator.
//!
//! Turns a free-text list such as `"Xdebug, pcov, sqlite, ast-beta"` into
//! the install commands for one platform and runtime version.
//!
//! # Architecture
//!
//! Resolution is table driven:
//!
//! 1. [`ExtensionRequest`] splits and normalizes the list, peeling off
//!    release-channel (`-beta`) and explicit release (`-2.9.8`) suffixes.
//! 2. [`PolicyRegistry`] rewrites aliases (`sqlite` -> `sqlite3`) and maps
//!    each name to an [`ExtensionStrategy`] for the platform and version.
//!    Names with no entry fall back to the platform's package manager.
//! 3. The [`emitter`] renders the strategy as Bash or PowerShell.
//!
//! The [`ExtensionResolver`] drives the three steps and never fails: unknown
//! names degrade to the generic install command and an unsupported platform
//! yields a single explanatory line.

pub mod emitter;
pub mod policy;
pub mod request;
pub mod resolver;
pub mod xdebug;

pub use emitter::Installation;
pub use policy::{
    Alias, AliasTarget, ExtensionStrategy, LoadDirective, PolicyEntry, PolicyRegistry, VersionGate,
};
pub use request::{Channel, ExtensionRequest, ExtensionToken};
pub use resolver::{DEFAULT_STEP_LABEL, ExtensionResolver, resolve};
pub use xdebug::{LATEST_XDEBUG_RELEASE, xdebug_release};
