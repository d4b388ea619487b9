//! Newest Xdebug release compatible with each runtime.

use setup_meta::{RuntimeVersion, VersionRange};

/// Release installed when no row below matches.
pub const LATEST_XDEBUG_RELEASE: &str = "2.9.6";

/// Half-open, non-overlapping ranges. First match wins.
const XDEBUG_RELEASES: [(VersionRange, &str); 4] = [
    (VersionRange::between((5, 3), (5, 4)), "2.2.7"),
    (VersionRange::between((5, 4), (5, 5)), "2.4.1"),
    (VersionRange::between((5, 5), (7, 0)), "2.5.5"),
    (VersionRange::between((7, 0), (7, 1)), "2.7.2"),
];

/// Xdebug release to pecl-install for `version`.
pub fn xdebug_release(version: &RuntimeVersion) -> &'static str {
    XDEBUG_RELEASES
        .iter()
        .find(|(range, _)| range.contains(version))
        .map_or(LATEST_XDEBUG_RELEASE, |&(_, release)| release)
}
