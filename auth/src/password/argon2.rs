use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::HashingError;
use super::strategy::HashingAlgorithm;
use super::strategy::HashingStrategy;

/// Adaptive, salted hashing strategy (Argon2id).
///
/// Every call to `hash` draws a fresh salt and returns a PHC string, so the
/// output is not reproducible; `verify` parses the stored PHC string instead
/// of comparing digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Strategy;

impl Argon2Strategy {
    /// Create a new strategy configured with Argon2 defaults.
    pub fn new() -> Self {
        Self
    }
}

impl HashingStrategy for Argon2Strategy {
    fn algorithm(&self) -> HashingAlgorithm {
        HashingAlgorithm::Argon2
    }

    fn hash(&self, _identity: &str, secret: &str) -> Result<String, HashingError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashingError::HashingFailed(e.to_string()))
    }

    fn verify(&self, _identity: &str, secret: &str, stored: &str) -> Result<bool, HashingError> {
        let parsed_hash = PasswordHash::new(stored).map_err(|e| {
            HashingError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
