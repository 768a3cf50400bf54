//! Error types for registry resolution.
//!
//! This module defines [`RegistryError`], the error type returned by every
//! public operation in the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RegistryError` for domain failures callers may want to match on
//! - Use `anyhow::Error` (via `RegistryError::Other`) for unexpected errors
//! - Errors are returned to the caller as-is; nothing here retries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for registry lookups and download URL resolution.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No registry record matches the requested name or URL.
    #[error("Registry not found: {what}")]
    NotFound { what: String },

    /// A registry record with this name already exists.
    #[error("Registry already exists: {name}")]
    AlreadyExists { name: String },

    /// The record declares a registry type no factory can build.
    #[error("unknown registry type: {registry_type}")]
    UnknownRegistryType { registry_type: String },

    /// The record's format tags do not form a supported combination.
    #[error("unknown registry format: {format}")]
    UnknownRegistryFormat { format: String },

    /// A short type reference did not have the expected components.
    #[error("cannot parse short github url: {type_string}")]
    InvalidShortType { type_string: String },

    /// A fully qualified download URL failed to parse.
    #[error("cannot parse download URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// A registry URL is not of the form `github.com/<owner>/<repo>`.
    #[error("invalid registry URL: {url}")]
    InvalidRegistryUrl { url: String },

    /// Type components failed validation.
    #[error("invalid type: {message}")]
    InvalidType { message: String },

    /// A registry was resolved for a short type it does not serve.
    #[error("cannot get github registry for {type_string}")]
    InternalInconsistency { type_string: String },

    /// Listing repository contents failed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
