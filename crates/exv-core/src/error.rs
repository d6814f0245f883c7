//! # Error Types
//!
//! Errors raised by the foundational types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Registry guard failures (not authorized, already verified, not found)
//! are not here: they live next to the registry in `exv-registry`, where
//! they carry their ledger error codes.

use thiserror::Error;

/// Top-level error type for the foundational layer.
#[derive(Error, Debug)]
pub enum ExvError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A principal string was rejected.
    #[error("invalid principal: {0}")]
    Principal(#[from] PrincipalError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Reasons a principal string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrincipalError {
    /// The principal was empty.
    #[error("principal is empty")]
    Empty,

    /// The address part exceeds the maximum length.
    #[error("principal address is {len} characters, maximum is {max}")]
    AddressTooLong {
        /// Observed length.
        len: usize,
        /// Permitted maximum.
        max: usize,
    },

    /// The contract name part exceeds the maximum length.
    #[error("contract name is {len} characters, maximum is {max}")]
    ContractNameTooLong {
        /// Observed length.
        len: usize,
        /// Permitted maximum.
        max: usize,
    },

    /// A character outside the permitted alphabet was found.
    #[error("invalid character {ch:?} in principal {principal:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// The rejected input.
        principal: String,
    },

    /// A contract principal had an empty address or contract name.
    #[error("malformed contract principal {0:?}")]
    MalformedContract(String),
}
