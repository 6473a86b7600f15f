//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, GhostError>`.

use thiserror::Error;

/// The main error type for ghost-constraint operations.
#[derive(Error, Debug)]
pub enum GhostError {
    // ========================================================================
    // Capture Errors
    // ========================================================================
    /// Nothing was selected when an offset capture was requested.
    #[error("selection too small, select at least 1 object")]
    EmptySelection,

    // ========================================================================
    // Paste Errors
    // ========================================================================
    /// The recorded parent no longer exists in the scene. Fatal to the whole
    /// paste: remaining children and frames are not processed.
    #[error("recorded parent {0:?} no longer exists in the scene")]
    MissingParent(String),

    /// A scene query or mutation failed inside the host.
    #[error("scene error: {0}")]
    Scene(String),

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// The platform reported no per-user data directory.
    #[error("no user data directory available on this platform")]
    DataDirUnavailable,

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted offset document exists but is not valid JSON of the
    /// expected shape.
    #[error("offset document parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, GhostError>`.
pub type Result<T> = std::result::Result<T, GhostError>;
