use thiserror::Error;

/// Result type alias for FOFA operations
pub type Result<T> = std::result::Result<T, FofaError>;

/// Errors that can occur when using the FOFA API
#[derive(Error, Debug)]
pub enum FofaError {
    /// Authentication failed - the email/key pair was rejected
    #[error("authentication failed: invalid email or key")]
    Unauthorized,

    /// The endpoint answered with a non-success HTTP status
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// The service reported an error in the reply envelope
    #[error("FOFA reported an error: {0}")]
    Remote(String),

    /// The reply envelope did not have the expected shape
    #[error("FOFA reply with wrong format: {0}")]
    Format(String),

    /// The query matched nothing
    #[error("no data in FOFA reply")]
    NoData,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl FofaError {
    /// Build a format error from anything printable
    pub fn format(detail: impl Into<String>) -> Self {
        Self::Format(detail.into())
    }

    /// Returns true if the query simply matched nothing
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Returns true if the service itself reported the error
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FofaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}
