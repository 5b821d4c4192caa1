pub mod errors;
pub mod models;
pub mod ports;
pub mod provider;
pub mod session;
pub mod verifier;
