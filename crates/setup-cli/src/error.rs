//! Error types for setup-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from setup-meta (version, platform or config)
    #[error(transparent)]
    Meta(#[from] setup_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}
