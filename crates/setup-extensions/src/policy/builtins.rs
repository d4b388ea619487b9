//! Built-in extension policy - SINGLE SOURCE OF TRUTH
//!
//! Every per-extension special case the resolver knows about is a row in
//! one of the two tables below. Rows are checked in order; the first match
//! wins, so narrower ranges must come before broader ones for the same
//! extension and platform.

use setup_meta::{Platform, VersionRange};

use super::{Alias, AliasTarget, ExtensionStrategy, PolicyEntry};

/// Number of built-in policy rows.
pub const BUILTIN_POLICY_COUNT: usize = 17;

/// Number of built-in aliases.
pub const BUILTIN_ALIAS_COUNT: usize = 4;

/// Returns all built-in policy rows.
pub fn builtin_policies() -> Vec<PolicyEntry> {
    use ExtensionStrategy::{Brew, XdebugRelease};
    use Platform::{Darwin, Linux, Win32};

    let mut entries = vec![
        // Coverage drivers
        PolicyEntry::new("xdebug", Darwin, VersionRange::at_least(5, 6), Brew),
        PolicyEntry::new("xdebug", Darwin, VersionRange::below(5, 6), XdebugRelease),
        PolicyEntry::new("xdebug", Linux, VersionRange::any(), XdebugRelease),
        PolicyEntry::new("pcov", Darwin, VersionRange::at_least(7, 1), Brew),
        PolicyEntry::new(
            "pcov",
            Win32,
            VersionRange::below(7, 1),
            ExtensionStrategy::unsupported("PHP 7.1 or newer is required."),
        ),
    ];

    // Formulae in the shivammathur/extensions tap
    for formula in ["grpc", "protobuf", "swoole"] {
        entries.push(PolicyEntry::new(
            formula,
            Darwin,
            VersionRange::between((5, 6), (7, 5)),
            Brew,
        ));
    }

    entries.extend([
        PolicyEntry::new(
            "redis",
            Darwin,
            VersionRange::below(7, 0),
            ExtensionStrategy::pinned("2.2.8"),
        ),
        PolicyEntry::new(
            "imagick",
            Darwin,
            VersionRange::any(),
            ExtensionStrategy::with_libraries("pkg-config imagemagick"),
        ),
        PolicyEntry::new(
            "gearman",
            Linux,
            VersionRange::between((5, 6), (7, 5)),
            ExtensionStrategy::script("gearman.sh", false),
        ),
    ]);

    // Phalcon builds from source against the runtime's headers
    let phalcon = [
        ("phalcon3", VersionRange::between((7, 0), (7, 4))),
        ("phalcon4", VersionRange::between((7, 2), (7, 5))),
    ];
    for (name, versions) in phalcon {
        entries.extend([
            PolicyEntry::new(name, Linux, versions, ExtensionStrategy::script("phalcon.sh", true)),
            PolicyEntry::new(
                name,
                Darwin,
                versions,
                ExtensionStrategy::script("phalcon_darwin.sh", true),
            ),
            PolicyEntry::new(name, Win32, versions, ExtensionStrategy::script("phalcon.ps1", true)),
        ]);
    }

    entries
}

/// Returns all built-in aliases.
pub fn builtin_aliases() -> Vec<Alias> {
    // The legacy mysql binding was removed in PHP 7.0; its DLLs ship
    // alongside mysqli and mysqlnd before that.
    let mysql_family = || {
        vec![
            AliasTarget::new("mysql", VersionRange::below(7, 0)),
            AliasTarget::always("mysqli"),
            AliasTarget::always("mysqlnd"),
        ]
    };

    vec![
        Alias::new("sqlite", None, vec![AliasTarget::always("sqlite3")]),
        Alias::new("mysql", Some(Platform::Win32), mysql_family()),
        Alias::new("mysqli", Some(Platform::Win32), mysql_family()),
        Alias::new("mysqlnd", Some(Platform::Win32), mysql_family()),
    ]
}
