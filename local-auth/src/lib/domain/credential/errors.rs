use auth::HashingError;
use thiserror::Error;

/// Error for provider resolution failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown authentication provider: {0}")]
    UnknownProvider(String),
}

/// Error for credential store infrastructure failures.
///
/// A user without a record is not an error; stores report it as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for credential verification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Credential decisions
    #[error("Invalid user name or password")]
    InvalidCredentials,

    #[error("User has no password (login restricted)")]
    NoStoredPassword,

    #[error("No user password provided")]
    NoClientPassword,

    // Infrastructure errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Hashing error: {0}")]
    Hashing(#[from] HashingError),
}

/// Discriminant of [`AuthError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    InvalidCredentials,
    NoStoredPassword,
    NoClientPassword,
    Configuration,
    Store,
    Hashing,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::InvalidCredentials => AuthErrorKind::InvalidCredentials,
            AuthError::NoStoredPassword => AuthErrorKind::NoStoredPassword,
            AuthError::NoClientPassword => AuthErrorKind::NoClientPassword,
            AuthError::Configuration(_) => AuthErrorKind::Configuration,
            AuthError::Store(_) => AuthErrorKind::Store,
            AuthError::Hashing(_) => AuthErrorKind::Hashing,
        }
    }

    /// True when the error is a decision about the submitted credentials rather
    /// than a failure of the provider itself.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::NoStoredPassword
                | AuthError::NoClientPassword
        )
    }

    /// Message safe to show to the client.
    ///
    /// Infrastructure details stay out of it.
    pub fn public_message(&self) -> String {
        if self.is_credential_failure() {
            self.to_string()
        } else {
            "Authentication is temporarily unavailable".to_string()
        }
    }
}
