//! Error types for setup-coverage

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown coverage driver '{driver}' (expected xdebug, pcov or none)")]
    UnknownDriver { driver: String },
}
