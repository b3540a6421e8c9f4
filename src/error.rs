//! Error types for folder name derivation.

use thiserror::Error;

/// Errors that can occur while deriving a folder name from a code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolderError {
    /// No code was supplied on the command line.
    #[error("missing argument: expected a code such as PROD1234")]
    MissingArgument,

    /// The code contains no digit characters.
    #[error("no digits found in code '{code}'")]
    NoDigitsFound { code: String },

    /// The folder scheme was given a zero bucket width.
    #[error("folder width must be at least 1")]
    InvalidWidth,
}
