//! Coverage driver setup for the PHP setup script generator.
//!
//! Picks between Xdebug, PCOV, or neither. Installation of the chosen driver
//! goes through the extension resolver; this crate adds the php.ini
//! directive and the commands that disable the other driver.

pub mod configurator;
pub mod disable;
pub mod driver;
pub mod error;

pub use configurator::{COVERAGE_STEP_LABEL, CoverageConfigurator, configure};
pub use disable::{disable_module, scrub_config};
pub use driver::CoverageDriver;
pub use error::{Error, Result};
