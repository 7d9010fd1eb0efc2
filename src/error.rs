//! Error types for the E*TRADE client.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum EtradeError {
    /// A required parameter was empty or a bound was exceeded. Raised before
    /// any request is sent.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Lookup by id found no matching record in a fetched collection.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type EtradeResult<T> = Result<T, EtradeError>;

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl HttpError {
    /// Map a non-success status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized(body),
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited(body),
            400..=499 => HttpError::BadRequest(body),
            500..=599 => HttpError::ServerError { status, body },
            _ => HttpError::UnexpectedStatus { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(HttpError::from_status(401, String::new()), HttpError::Unauthorized(_)));
        assert!(matches!(HttpError::from_status(404, String::new()), HttpError::NotFound(_)));
        assert!(matches!(HttpError::from_status(429, String::new()), HttpError::RateLimited(_)));
        assert!(matches!(HttpError::from_status(400, String::new()), HttpError::BadRequest(_)));
        assert!(matches!(
            HttpError::from_status(503, String::new()),
            HttpError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            HttpError::from_status(302, String::new()),
            HttpError::UnexpectedStatus { status: 302, .. }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = EtradeError::from(HttpError::ServerError {
            status: 500,
            body: "oops".to_string(),
        });
        assert_eq!(err.to_string(), "HTTP error: Server error 500: oops");
    }
}
