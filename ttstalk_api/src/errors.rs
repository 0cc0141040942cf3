//! Error types for the profile client.

use reqwest::StatusCode;

/// Errors that can occur while fetching or extracting profile data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport-level failure: timeout, DNS, connection refused.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The profile page responded with a non-success status. A status
    /// above 400 means the profile does not exist or is blocked.
    #[error("profile request returned status {status}")]
    HttpStatus { status: StatusCode },
    /// The page contained no embedded data script tag.
    #[error("no embedded profile data in page")]
    MissingEmbeddedData,
    /// The embedded payload was not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The embedded payload carried no non-empty user object.
    #[error("no user data in embedded payload")]
    UserNotFound,
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("parse error: {0}")]
    Parse(String),
}
