//! Error types for upcheck operations.
//!
//! This module defines [`UpcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store errors (settings/registry I/O and parsing) are fatal for the
//!   invocation and are never caught inside the per-module check loop
//! - Per-module errors (version lookup, fetch, malformed data) are caught
//!   at the module level and reported without aborting other modules
//! - [`UpcheckError::DialogUnavailable`] marks a missing desktop-dialog
//!   capability; it is the only recoverable notification error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for upcheck operations.
#[derive(Debug, Error)]
pub enum UpcheckError {
    /// Failed to parse a persisted store file (settings or registry).
    #[error("Failed to parse {path}: {message}")]
    StoreParse { path: PathBuf, message: String },

    /// Installed version of a module could not be determined.
    #[error("Could not determine installed version of '{module}': {message}")]
    VersionLookup { module: String, message: String },

    /// Fetching release metadata failed (network, HTTP status, or body).
    #[error("Failed to fetch release metadata from {url}: {message}")]
    Fetch { url: String, message: String },

    /// Release metadata did not contain a usable `tag_name` field.
    #[error("No tag_name in release metadata from {url}")]
    BadRelease { url: String },

    /// A version string did not parse as a semantic version.
    #[error("Invalid version '{version}': {message}")]
    InvalidVersion { version: String, message: String },

    /// A persisted last-checked date did not parse as YYYY-MM-DD.
    #[error("Malformed last-checked date: '{value}'")]
    MalformedDate { value: String },

    /// The desktop dialog capability is not available in this environment.
    ///
    /// Recoverable: the notifier falls back to console-only output.
    #[error("Desktop dialog capability unavailable: {message}")]
    DialogUnavailable { message: String },

    /// The desktop dialog was available but failed. Fatal.
    #[error("Desktop dialog failed: {message}")]
    Dialog { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for upcheck operations.
pub type Result<T> = std::result::Result<T, UpcheckError>;
