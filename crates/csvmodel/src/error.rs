//! Error types for csvmodel operations.

use std::io;
use thiserror::Error;

/// The error type for csvmodel operations.
///
/// Malformed input is never an error: width mismatches become
/// [`Diagnostic`](crate::Diagnostic)s and broken quoting degrades to a
/// single field. Only the collaborators around the core can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input lines or a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be serialized or deserialized.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for csvmodel operations.
pub type Result<T> = std::result::Result<T, Error>;
