//! # ABI Responses
//!
//! Every registry entry point answers with `(response bool uint)`: either
//! `ok` carrying a boolean or `err` carrying an unsigned error code.
//! `CallResponse` is that shape on the Rust side, and serializes as
//!
//! ```json
//! {"type":"ok","value":true}
//! {"type":"err","value":3}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, RegistryError};

/// Result of a registry call as seen across the ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallResponse {
    /// The call committed (or the read succeeded) with this value.
    Ok(bool),
    /// The call was rejected with this code.
    Err(ErrorCode),
}

impl CallResponse {
    /// Whether this is an `ok` response.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The error code, if this is an `err` response.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Ok(_) => None,
            Self::Err(code) => Some(*code),
        }
    }
}

impl From<Result<bool, RegistryError>> for CallResponse {
    fn from(result: Result<bool, RegistryError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err.code()),
        }
    }
}

impl std::fmt::Display for CallResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "(ok {value})"),
            Self::Err(code) => write!(f, "(err u{})", code.as_u32()),
        }
    }
}
