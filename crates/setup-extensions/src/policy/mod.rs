//! Extension install policy - declarative tables and their lookup.
//!
//! Per-extension special cases live in data ([`builtin_policies`],
//! [`builtin_aliases`]), not in control flow. Adding an extension means
//! adding a row.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_ALIAS_COUNT, BUILTIN_POLICY_COUNT, builtin_aliases, builtin_policies};
pub use store::PolicyRegistry;
pub use types::{Alias, AliasTarget, ExtensionStrategy, LoadDirective, PolicyEntry, VersionGate};
