use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::argon2::Argon2Strategy;
use super::digest::DigestStrategy;
use super::errors::HashingError;
use super::plain::PlainStrategy;

/// Pluggable transformation of a submitted secret into the value kept in a
/// credential store.
///
/// Digest-style strategies must be pure: the same `(identity, secret)` pair
/// yields the same digest in every process, because the stored value was
/// computed elsewhere and at another time.
pub trait HashingStrategy: Send + Sync + 'static {
    /// Algorithm this strategy implements.
    fn algorithm(&self) -> HashingAlgorithm;

    /// Compute the value to store for `secret` owned by `identity`.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected the input
    fn hash(&self, identity: &str, secret: &str) -> Result<String, HashingError>;

    /// Check a submitted secret against a stored value.
    ///
    /// The default hashes the secret and compares digests in constant time.
    /// Salted strategies whose `hash` output is not reproducible override it.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing the submitted secret failed
    /// * `VerificationFailed` - The stored value cannot be interpreted
    fn verify(&self, identity: &str, secret: &str, stored: &str) -> Result<bool, HashingError> {
        let digest = self.hash(identity, secret)?;
        Ok(constant_time_eq(digest.as_bytes(), stored.as_bytes()))
    }
}

/// Hashing policy a provider can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    /// Secret stored as-is, for credential properties that are not passwords.
    Plain,
    /// Unsalted MD5 digest of the secret, uppercase hex.
    #[default]
    Hash,
    /// Argon2id with a random salt embedded in a PHC string.
    Argon2,
}

impl HashingAlgorithm {
    /// Build the strategy implementing this algorithm.
    pub fn strategy(self) -> Arc<dyn HashingStrategy> {
        match self {
            HashingAlgorithm::Plain => Arc::new(PlainStrategy),
            HashingAlgorithm::Hash => Arc::new(DigestStrategy),
            HashingAlgorithm::Argon2 => Arc::new(Argon2Strategy::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashingAlgorithm::Plain => "plain",
            HashingAlgorithm::Hash => "hash",
            HashingAlgorithm::Argon2 => "argon2",
        }
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
