//! Error handling for table registration, loading and queries.

use std::fmt;
use std::io;
use std::result;

/// A specialized `Result` type for store operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while loading, registering or querying tables.
#[derive(Debug)]
pub enum Error {
    /// No table is registered under the given name.
    NotFound(String),

    /// Invalid argument provided.
    InvalidArgument(String),

    /// Uploaded bytes could not be turned into a table.
    Parse(String),

    /// Configuration could not be read or written.
    Config(String),

    /// An I/O error occurred.
    Io(io::Error),

    /// A JSON document could not be decoded.
    Json(serde_json::Error),
}

impl Error {
    /// Whether this error means the requested table does not exist.
    ///
    /// The HTTP layer maps this to its "not found" response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(name) => write!(f, "Table not found: {}", name),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}
