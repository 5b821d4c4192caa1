pub mod argon2;
pub mod digest;
pub mod errors;
pub mod plain;
pub mod strategy;

pub use self::argon2::Argon2Strategy;
pub use digest::DigestStrategy;
pub use errors::HashingError;
pub use plain::PlainStrategy;
pub use strategy::constant_time_eq;
pub use strategy::HashingAlgorithm;
pub use strategy::HashingStrategy;
