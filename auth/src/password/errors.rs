use thiserror::Error;

/// Error type for hashing strategy operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashingError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
