use std::fmt;

/// Result type for chipchip-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the ChipChip API
#[derive(Debug)]
pub enum Error {
    /// Transport failure (connect, timeout, TLS)
    Network(reqwest::Error),

    /// Missing or rejected credentials, or not allowed to touch the resource
    Unauthorized(String),

    /// Resource does not exist
    NotFound(String),

    /// Server rejected the request body
    Validation(String),

    /// Any other non-success status
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    Decode(String),
}

impl Error {
    /// Whether trying the same request again can succeed without user changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Server { status, .. } => *status >= 500,
            Error::Unauthorized(_)
            | Error::NotFound(_)
            | Error::Validation(_)
            | Error::Decode(_) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(err) => write!(f, "Network error: {}", err),
            Error::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Validation(msg) => write!(f, "Rejected by server: {}", msg),
            Error::Server { status, message } => write!(f, "HTTP {}: {}", status, message),
            Error::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err),
            Error::Unauthorized(_)
            | Error::NotFound(_)
            | Error::Validation(_)
            | Error::Server { .. }
            | Error::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
