//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A filter name outside the accepted set was supplied. Raised before any
    /// network I/O.
    #[error("Invalid query filter: {0}")]
    InvalidFilter(String),
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be used as a path base: {0}")]
    CannotBeABase(String),
    /// The HTTP request failed (DNS, connection, timeout, or body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with an error payload.
    #[error("The API request returned an error: {message}")]
    Api { message: String },
    /// The API returned a non-200 status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a JSON array of the expected records.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
