use std::fmt;

/// Result type for chipchip-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating chirp content locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Content is empty or whitespace only
    EmptyContent,

    /// Content exceeds the character limit
    ContentTooLong { len: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContent => write!(f, "Nothing to chirp: content is empty"),
            Error::ContentTooLong { len, max } => {
                write!(f, "Chirp is too long: {} characters (max {})", len, max)
            }
        }
    }
}

impl std::error::Error for Error {}
