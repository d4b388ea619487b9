//! Runtime versions and version gating.
//!
//! PHP versions arrive as dotted `major.minor` strings (`"7.4"`) and are
//! ordered as semver by padding the missing patch with `0`. Two ways of
//! gating on a version are provided:
//!
//! - [`VersionRange`], a half-open `[from, until)` range over minor versions,
//!   used by the static policy tables.
//! - [`VersionConstraint`], a semver requirement such as `>=7.1,<8.0`,
//!   used for user-supplied overrides in `setup.toml`.
//!
//! # Examples
//!
//! ```
//! use setup_meta::version::{RuntimeVersion, VersionConstraint, VersionRange};
//!
//! let php = RuntimeVersion::parse("7.2").unwrap();
//! assert!(VersionRange::between((7, 0), (7, 4)).contains(&php));
//! assert!(!VersionRange::below(7, 0).contains(&php));
//!
//! let constraint = VersionConstraint::parse(">=7.1,<8.0").unwrap();
//! assert!(constraint.matches(&php));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A requested PHP runtime version.
///
/// Commands are rendered with the `major.minor` series (`php7.4-pcov`,
/// `/etc/php/7.4`) whatever patch level was requested. Comparisons use the
/// full semver form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeVersion {
    series: String,
    parsed: semver::Version,
}

impl RuntimeVersion {
    /// Parse `major.minor` or `major.minor.patch`.
    pub fn parse(version: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidVersion {
            version: version.to_string(),
            reason: reason.to_string(),
        };

        let parts = version
            .trim()
            .split('.')
            .map(str::parse::<u64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid("components must be numbers"))?;
        let parsed = match parts[..] {
            [major, minor] => semver::Version::new(major, minor, 0),
            [major, minor, patch] => semver::Version::new(major, minor, patch),
            _ => return Err(invalid("expected major.minor or major.minor.patch")),
        };

        Ok(Self {
            series: format!("{}.{}", parsed.major, parsed.minor),
            parsed,
        })
    }

    /// The `major.minor` series.
    pub fn as_str(&self) -> &str {
        &self.series
    }

    pub fn semver(&self) -> &semver::Version {
        &self.parsed
    }

    /// Whether this version is at or above `major.minor`.
    pub fn at_least(&self, major: u64, minor: u64) -> bool {
        self.parsed >= semver::Version::new(major, minor, 0)
    }
}

impl FromStr for RuntimeVersion {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.series)
    }
}

impl PartialOrd for RuntimeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuntimeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parsed.cmp(&other.parsed)
    }
}

/// Half-open range of minor versions, `[from, until)`.
///
/// Either bound may be open. Bounds are `(major, minor)` pairs so tables can
/// be written as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionRange {
    from: Option<(u64, u64)>,
    until: Option<(u64, u64)>,
}

impl VersionRange {
    /// Every version.
    pub const fn any() -> Self {
        Self {
            from: None,
            until: None,
        }
    }

    /// `major.minor` and newer.
    pub const fn at_least(major: u64, minor: u64) -> Self {
        Self {
            from: Some((major, minor)),
            until: None,
        }
    }

    /// Strictly older than `major.minor`.
    pub const fn below(major: u64, minor: u64) -> Self {
        Self {
            from: None,
            until: Some((major, minor)),
        }
    }

    /// From `from` (inclusive) up to `until` (exclusive).
    pub const fn between(from: (u64, u64), until: (u64, u64)) -> Self {
        Self {
            from: Some(from),
            until: Some(until),
        }
    }

    pub fn contains(&self, version: &RuntimeVersion) -> bool {
        let v = version.semver();
        let above_floor = self
            .from
            .is_none_or(|(major, minor)| *v >= semver::Version::new(major, minor, 0));
        let below_ceiling = self
            .until
            .is_none_or(|(major, minor)| *v < semver::Version::new(major, minor, 0));
        above_floor && below_ceiling
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.until) {
            (None, None) => f.write_str("*"),
            (Some((a, b)), None) => write!(f, ">={a}.{b}"),
            (None, Some((c, d))) => write!(f, "<{c}.{d}"),
            (Some((a, b)), Some((c, d))) => write!(f, ">={a}.{b},<{c}.{d}"),
        }
    }
}

/// A version constraint from `setup.toml`, such as `>=7.1,<8.0`.
///
/// Comma-separated comparators must all match. Partial versions follow
/// semver rules, so `<=7.4` admits every 7.4 patch release. `==7.4` and a
/// bare `7.4` pin the 7.4 series.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    req: semver::VersionReq,
    raw: String,
}

impl VersionConstraint {
    pub fn parse(constraint: &str) -> Result<Self> {
        let invalid = |reason: String| Error::VersionConstraintParse {
            constraint: constraint.to_string(),
            reason,
        };

        let comparators: Vec<String> = constraint
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(comparator)
            .collect();
        if comparators.is_empty() {
            return Err(invalid("empty constraint".to_string()));
        }

        let req = semver::VersionReq::parse(&comparators.join(", "))
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            req,
            raw: constraint.trim().to_string(),
        })
    }

    pub fn matches(&self, version: &RuntimeVersion) -> bool {
        self.req.matches(version.semver())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Rewrite one comparator into semver's requirement syntax.
fn comparator(part: &str) -> String {
    if let Some(version) = part.strip_prefix("==") {
        format!("={}", version.trim())
    } else if part.starts_with(|c: char| c.is_ascii_digit()) {
        // semver reads a bare version as a caret requirement
        format!("={part}")
    } else {
        part.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn php(v: &str) -> RuntimeVersion {
        RuntimeVersion::parse(v).unwrap()
    }

    // --- RuntimeVersion ---

    #[test]
    fn test_parse_two_part() {
        let v = php("7.4");
        assert_eq!(v.as_str(), "7.4");
        assert_eq!(v.semver(), &semver::Version::new(7, 4, 0));
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(php(" 8.0 ").as_str(), "8.0");
    }

    #[test]
    fn test_patch_level_renders_as_series() {
        let v = php("7.4.3");
        assert_eq!(v.as_str(), "7.4");
        assert_eq!(v.to_string(), "7.4");
        assert_eq!(v.semver(), &semver::Version::new(7, 4, 3));
        assert!(v > php("7.4"));
    }

    #[rstest]
    #[case("latest")]
    #[case("7")]
    #[case("")]
    #[case("7.4.3.1")]
    #[case("7.x")]
    #[case("8.0-dev")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(RuntimeVersion::parse(input).is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(php("7.10") > php("7.9"));
        assert!(php("5.6") < php("7.0"));
        assert!(php("8.0") > php("7.4.30"));
    }

    #[test]
    fn test_at_least() {
        assert!(php("7.1").at_least(7, 1));
        assert!(php("8.0").at_least(7, 1));
        assert!(!php("7.0").at_least(7, 1));
    }

    // --- VersionRange ---

    #[rstest]
    #[case(VersionRange::any(), "5.3", true)]
    #[case(VersionRange::at_least(7, 1), "7.1", true)]
    #[case(VersionRange::at_least(7, 1), "7.0", false)]
    #[case(VersionRange::below(7, 0), "5.6", true)]
    #[case(VersionRange::below(7, 0), "7.0", false)]
    #[case(VersionRange::between((7, 0), (7, 4)), "7.0", true)]
    #[case(VersionRange::between((7, 0), (7, 4)), "7.3", true)]
    #[case(VersionRange::between((7, 0), (7, 4)), "7.4", false)]
    #[case(VersionRange::between((7, 0), (7, 4)), "5.6", false)]
    #[case(VersionRange::between((7, 0), (7, 4)), "7.3.33", true)]
    fn test_range_contains(#[case] range: VersionRange, #[case] version: &str, #[case] expected: bool) {
        assert_eq!(range.contains(&php(version)), expected, "{range} vs {version}");
    }

    #[test]
    fn test_range_display() {
        assert_eq!(VersionRange::any().to_string(), "*");
        assert_eq!(VersionRange::at_least(7, 1).to_string(), ">=7.1");
        assert_eq!(VersionRange::below(7, 0).to_string(), "<7.0");
        assert_eq!(
            VersionRange::between((5, 6), (7, 5)).to_string(),
            ">=5.6,<7.5"
        );
    }

    // --- VersionConstraint ---

    #[rstest]
    #[case(">=7.1,<8.0", "7.1", true)]
    #[case(">=7.1,<8.0", "7.4.30", true)]
    #[case(">=7.1,<8.0", "8.0", false)]
    #[case(">=7.1, <8.0", "5.6", false)]
    #[case(">7.0", "7.1", true)]
    #[case(">7.0", "7.0.5", false)]
    #[case("<=7.0", "7.0.33", true)]
    #[case("<=7.0", "7.1", false)]
    #[case("8.0", "8.0", true)]
    #[case("8.0", "8.0.2", true)]
    #[case("8.0", "8.1", false)]
    #[case("==7.4", "7.4", true)]
    #[case("==7.4", "7.3", false)]
    fn test_constraint_matches(#[case] constraint: &str, #[case] version: &str, #[case] expected: bool) {
        let c = VersionConstraint::parse(constraint).unwrap();
        assert_eq!(c.matches(&php(version)), expected, "{constraint} vs {version}");
    }

    #[test]
    fn test_constraint_keeps_text() {
        let c = VersionConstraint::parse(" >=7.0,<7.4 ").unwrap();
        assert_eq!(c.as_str(), ">=7.0,<7.4");
        assert_eq!(c.to_string(), ">=7.0,<7.4");
    }

    #[rstest]
    #[case("")]
    #[case(" , ")]
    #[case(">=abc")]
    #[case("~~7")]
    #[case("!=7.0")]
    fn test_constraint_rejects(#[case] constraint: &str) {
        assert!(VersionConstraint::parse(constraint).is_err());
    }
}
