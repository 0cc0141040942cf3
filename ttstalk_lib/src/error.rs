//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream client errors
/// and adding file, serialization, and input validation failures.
#[derive(Debug)]
pub enum StalkError {
    /// An error from the underlying profile client.
    Api(ttstalk_api::Error),
    /// A file read or write failed.
    Io(std::io::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// CSV writing failed.
    Csv(csv::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for StalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for StalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<ttstalk_api::Error> for StalkError {
    fn from(e: ttstalk_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for StalkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StalkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<csv::Error> for StalkError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
