//! Error types for the jkspub library.
//!
//! Every failure mode of a keystore read (missing file, bad password,
//! malformed container, unknown alias, wrong entry type) maps to its own
//! variant so callers can report them distinctly.

use thiserror::Error;

/// The main error type for keystore operations.
#[derive(Error, Debug)]
pub enum JksError {
    /// The keystore file does not exist
    #[error("Keystore file not found: {0}")]
    FileNotFound(String),

    /// Storage I/O error
    #[error("Storage I/O error: {0}")]
    StorageError(#[from] std::io::Error),

    /// The keystore container is malformed or unsupported
    #[error("Keystore format error: {0}")]
    FormatError(String),

    /// The store integrity digest did not match
    #[error("Integrity check failed: store password is incorrect or keystore is corrupted")]
    IntegrityError,

    /// No entry exists under the requested alias
    #[error("Alias not found: {0}")]
    NotFoundError(String),

    /// The entry exists but is not a private key entry
    #[error("Entry '{0}' is not a private key entry")]
    WrongEntryTypeError(String),

    /// The protected key did not decrypt under the given key password
    #[error("Cannot recover key: key password is incorrect")]
    UnrecoverableKeyError,

    /// Certificate parsing or encoding error
    #[error("Certificate error: {0}")]
    CertificateError(String),
}

/// A specialized Result type for keystore operations.
pub type Result<T> = std::result::Result<T, JksError>;
