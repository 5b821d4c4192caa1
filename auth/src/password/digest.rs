use md5::Digest;
use md5::Md5;

use super::errors::HashingError;
use super::strategy::HashingAlgorithm;
use super::strategy::HashingStrategy;

/// Unsalted MD5 digest strategy, uppercase hex.
///
/// The digest depends on the secret only, so two identities sharing a
/// password share a digest. This is the format local password digests are
/// stored in; changing it invalidates every stored credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestStrategy;

impl HashingStrategy for DigestStrategy {
    fn algorithm(&self) -> HashingAlgorithm {
        HashingAlgorithm::Hash
    }

    fn hash(&self, _identity: &str, secret: &str) -> Result<String, HashingError> {
        let mut hasher = Md5::new();
        hasher.update(secret.as_bytes());
        Ok(hex::encode_upper(hasher.finalize()))
    }
}
