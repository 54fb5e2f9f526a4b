//! CLI error type.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument was malformed or unsupported.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Holder file was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine rejected the input.
    #[error(transparent)]
    Validation(#[from] captable_waterfall::ValidationError),

    /// A date argument did not parse.
    #[error(transparent)]
    Date(#[from] captable_core::types::DateError),

    /// Vesting schedule arguments were inconsistent.
    #[error(transparent)]
    Schedule(#[from] captable_models::vesting::ScheduleError),
}
