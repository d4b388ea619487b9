//! Coverage driver selector.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which coverage driver the generated script leaves enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageDriver {
    Xdebug,
    Pcov,
    /// Disable both drivers
    None,
}

impl CoverageDriver {
    pub const ALL: [CoverageDriver; 3] =
        [CoverageDriver::Xdebug, CoverageDriver::Pcov, CoverageDriver::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageDriver::Xdebug => "xdebug",
            CoverageDriver::Pcov => "pcov",
            CoverageDriver::None => "none",
        }
    }
}

impl FromStr for CoverageDriver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "xdebug" => Ok(CoverageDriver::Xdebug),
            "pcov" => Ok(CoverageDriver::Pcov),
            "none" => Ok(CoverageDriver::None),
            _ => Err(Error::UnknownDriver {
                driver: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CoverageDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
