//! Error types for ECH key generation
//!
//! Every failure in the pipeline is fatal for the current invocation. The
//! variants fall into three groups:
//!
//! - Input validation: [`Error::InvalidConfigId`], [`Error::EmptyPublicName`],
//!   [`Error::PublicNameTooLong`], [`Error::InvalidPublicKeyLength`]
//! - Cryptographic failure: [`Error::Rng`]
//! - Encoding failure: [`Error::Encode`], which signals a bug rather than bad input
//!
//! # Result Type Alias
//!
//! [`Result<T>`] is a convenient alias for `std::result::Result<T, Error>`.

/// Error types for ECH key generation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config ID outside the uint8 range
    #[error("ID must be a uint8 (0-255), got {0}")]
    InvalidConfigId(i64),

    /// public_name is empty
    #[error("public_name must not be empty")]
    EmptyPublicName,

    /// public_name does not fit its 1-byte length prefix
    #[error("public_name exceeds 255 bytes: {0}")]
    PublicNameTooLong(usize),

    /// public_key length does not match the KEM
    #[error("public_key must be {expected} bytes, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    /// Secure random source unavailable
    #[error("random source failure: {0}")]
    Rng(String),

    /// Framing invariant violated while encoding
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type alias for ECH key generation
pub type Result<T> = std::result::Result<T, Error>;
