//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// A required flag or operation is missing or rejected before any service call.
    #[error("{0}")]
    Params(String),

    /// The peer invocation itself failed (non-zero exit, unreadable output, ...).
    #[error("Service Error: {0}")]
    Service(String),

    /// The peer invocation exceeded the configured service timeout.
    #[error("Service Error: peer invocation timed out after {0}s")]
    Timeout(u64),

    /// Error loading or parsing the configuration file.
    #[error("Config Error: {0}")]
    Config(String),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// The uniform wrapper crossing the outward CLI boundary.
    #[error("{0}")]
    Process(String),
}

impl AppError {
    /// Re-wraps any error as the process-level error the hosting CLI reports.
    ///
    /// Already-wrapped errors pass through untouched so the prefix is never doubled.
    pub fn into_process(self) -> AppError {
        match self {
            AppError::Process(_) => self,
            other => AppError::Process(format!("[x] Process Error: {}", other)),
        }
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---
// These allow easy conversion from external error types into AppError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
