use super::errors::HashingError;
use super::strategy::HashingAlgorithm;
use super::strategy::HashingStrategy;

/// Identity strategy for credential properties stored in clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStrategy;

impl HashingStrategy for PlainStrategy {
    fn algorithm(&self) -> HashingAlgorithm {
        HashingAlgorithm::Plain
    }

    fn hash(&self, _identity: &str, secret: &str) -> Result<String, HashingError> {
        Ok(secret.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_round_trips_secret() {
        assert_eq!(PlainStrategy.hash("alice", "secret").unwrap(), "secret");
        assert!(PlainStrategy.verify("alice", "secret", "secret").unwrap());
        assert!(!PlainStrategy.verify("alice", "secret", "Secret").unwrap());
    }
}
