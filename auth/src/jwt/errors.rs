use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Missing or invalid Authorization header")]
    MissingCredentials,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Unexpected signing algorithm")]
    WrongAlgorithm,

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
