//! Error types for rigup operations.
//!
//! This module defines [`RigupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RigupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RigupError::Other`) for unexpected errors
//! - A provisioning run aborts on the first error; there is no retry and no
//!   rollback, and the failing command's exit code becomes the process's

use thiserror::Error;

/// Core error type for rigup operations.
#[derive(Debug, Error)]
pub enum RigupError {
    /// The OS identifier matched neither supported platform.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// An external command exited non-zero (or was killed by a signal).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external command could not be spawned at all.
    #[error("Failed to launch command: {command}")]
    CommandSpawn { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigupError {
    /// Exit code to report for this error.
    ///
    /// Command failures propagate the child's own exit code; everything
    /// else (including signal deaths, where there is no code) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RigupError::CommandFailed { code, .. } => code.unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for rigup operations.
pub type Result<T> = std::result::Result<T, RigupError>;
