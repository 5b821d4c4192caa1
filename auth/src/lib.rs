//! Credential hashing library
//!
//! Provides the hashing strategies authentication providers are configured with:
//! - `hash`: unsalted MD5 digest in uppercase hex, reproducible across processes
//! - `plain`: identity transform for non-password credential properties
//! - `argon2`: salted Argon2id, verified through the PHC string
//!
//! Providers select a strategy through [`HashingAlgorithm`] and only ever talk to
//! the [`HashingStrategy`] trait, so the algorithm can be swapped without touching
//! the verification flow.
//!
//! # Examples
//!
//! ```
//! use auth::{HashingAlgorithm, HashingStrategy};
//!
//! let strategy = HashingAlgorithm::Hash.strategy();
//! let stored = strategy.hash("alice", "secret").unwrap();
//! assert!(strategy.verify("alice", "secret", &stored).unwrap());
//! assert!(!strategy.verify("alice", "wrong", &stored).unwrap());
//! ```

pub mod password;

pub use password::constant_time_eq;
pub use password::Argon2Strategy;
pub use password::DigestStrategy;
pub use password::HashingAlgorithm;
pub use password::HashingError;
pub use password::HashingStrategy;
pub use password::PlainStrategy;
