//! # Registry Errors and Ledger Error Codes
//!
//! Every registry failure maps to exactly one unsigned ledger error code.
//! The codes are part of the ABI and must never be renumbered:
//!
//! | Code | Variant           | Raised by                                   |
//! |------|-------------------|---------------------------------------------|
//! | `1`  | `NotAuthorized`   | verify, deactivate, transfer-admin          |
//! | `2`  | `AlreadyVerified` | verify                                      |
//! | `3`  | `NotFound`        | deactivate, is-verified                     |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use exv_core::Principal;

// ─── Error Codes ─────────────────────────────────────────────────────

/// Numeric error code returned across the ledger ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum ErrorCode {
    /// The caller is not the current admin.
    NotAuthorized = 1,
    /// The exporter already has a record.
    AlreadyVerified = 2,
    /// The exporter has no record.
    NotFound = 3,
}

impl ErrorCode {
    /// The unsigned code carried in an `err` response.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Symbolic name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAuthorized => "ERR_NOT_AUTHORIZED",
            Self::AlreadyVerified => "ERR_ALREADY_VERIFIED",
            Self::NotFound => "ERR_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (u{})", self.as_str(), self.as_u32())
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> Self {
        code.as_u32()
    }
}

/// A numeric code with no registry meaning.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown registry error code u{0}")]
pub struct UnknownErrorCode(pub u32);

impl TryFrom<u32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::NotAuthorized),
            2 => Ok(Self::AlreadyVerified),
            3 => Ok(Self::NotFound),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

// ─── Registry Error ──────────────────────────────────────────────────

/// A rejected registry call, with the principal that caused the rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The sender is not the current admin.
    #[error("sender {sender} is not the registry admin")]
    NotAuthorized {
        /// The rejected sender.
        sender: Principal,
    },

    /// The exporter already has a record.
    #[error("exporter {exporter} is already verified")]
    AlreadyVerified {
        /// The exporter that was submitted again.
        exporter: Principal,
    },

    /// The exporter has no record.
    #[error("exporter {exporter} not found")]
    NotFound {
        /// The unknown exporter.
        exporter: Principal,
    },
}

impl RegistryError {
    /// The ledger error code for this rejection.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotAuthorized { .. } => ErrorCode::NotAuthorized,
            Self::AlreadyVerified { .. } => ErrorCode::AlreadyVerified,
            Self::NotFound { .. } => ErrorCode::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG").unwrap()
    }

    #[test]
    fn test_code_values_are_stable() {
        assert_eq!(ErrorCode::NotAuthorized.as_u32(), 1);
        assert_eq!(ErrorCode::AlreadyVerified.as_u32(), 2);
        assert_eq!(ErrorCode::NotFound.as_u32(), 3);
    }

    #[test]
    fn test_try_from_known_codes() {
        for code in [
            ErrorCode::NotAuthorized,
            ErrorCode::AlreadyVerified,
            ErrorCode::NotFound,
        ] {
            assert_eq!(ErrorCode::try_from(code.as_u32()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown_code() {
        assert_eq!(ErrorCode::try_from(0), Err(UnknownErrorCode(0)));
        assert_eq!(ErrorCode::try_from(4), Err(UnknownErrorCode(4)));
    }

    #[test]
    fn test_registry_error_codes() {
        let p = principal();
        assert_eq!(
            RegistryError::NotAuthorized { sender: p.clone() }.code(),
            ErrorCode::NotAuthorized
        );
        assert_eq!(
            RegistryError::AlreadyVerified { exporter: p.clone() }.code(),
            ErrorCode::AlreadyVerified
        );
        assert_eq!(
            RegistryError::NotFound { exporter: p }.code(),
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_error_code_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "3");
        let parsed: ErrorCode = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, ErrorCode::AlreadyVerified);
        assert!(serde_json::from_str::<ErrorCode>("9").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotAuthorized.to_string(), "ERR_NOT_AUTHORIZED (u1)");
        let err = RegistryError::NotFound { exporter: principal() };
        assert!(err.to_string().contains("not found"));
    }
}
