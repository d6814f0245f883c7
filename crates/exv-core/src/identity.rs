//! # Ledger Identity Newtype
//!
//! `Principal` is the opaque, comparable identity of a caller or an
//! exporter. Two shapes are accepted:
//!
//! ```text
//! ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM                       standard
//! ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.exporter-registry     contract
//! ```
//!
//! ## Security Invariant
//!
//! The inner string is private and only reachable through
//! [`Principal::new()`], which validates the alphabet and lengths.
//! Deserialization goes through the same constructor, so a state file
//! cannot smuggle in a principal the CLI would have rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrincipalError;

/// Maximum length of the address part of a principal.
pub const MAX_ADDRESS_LEN: usize = 128;

/// Maximum length of the contract-name part of a contract principal.
pub const MAX_CONTRACT_NAME_LEN: usize = 40;

/// An opaque, comparable ledger identity.
///
/// Ordering is lexicographic on the textual form, which keeps registry
/// iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Validate and wrap a principal string.
    ///
    /// # Errors
    ///
    /// Returns a [`PrincipalError`] if the input is empty, too long, or
    /// contains characters outside the permitted alphabet.
    pub fn new(s: impl Into<String>) -> Result<Self, PrincipalError> {
        let s = s.into();
        if s.is_empty() {
            return Err(PrincipalError::Empty);
        }

        let (address, contract) = match s.split_once('.') {
            Some((address, contract)) => (address, Some(contract)),
            None => (s.as_str(), None),
        };

        if address.is_empty() || contract.is_some_and(str::is_empty) {
            return Err(PrincipalError::MalformedContract(s));
        }
        if address.len() > MAX_ADDRESS_LEN {
            return Err(PrincipalError::AddressTooLong {
                len: address.len(),
                max: MAX_ADDRESS_LEN,
            });
        }
        if let Some(ch) = address.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(PrincipalError::InvalidCharacter { ch, principal: s });
        }

        if let Some(contract) = contract {
            if contract.len() > MAX_CONTRACT_NAME_LEN {
                return Err(PrincipalError::ContractNameTooLong {
                    len: contract.len(),
                    max: MAX_CONTRACT_NAME_LEN,
                });
            }
            if let Some(ch) = contract
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(PrincipalError::InvalidCharacter { ch, principal: s });
            }
        }

        Ok(Self(s))
    }

    /// The textual form of the principal.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a contract principal (`address.contract-name`).
    pub fn is_contract(&self) -> bool {
        self.0.contains('.')
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Principal {
    type Error = PrincipalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Principal> for String {
    fn from(p: Principal) -> Self {
        p.0
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

    #[test]
    fn test_standard_principal_accepted() {
        let p = Principal::new(ADMIN).unwrap();
        assert_eq!(p.as_str(), ADMIN);
        assert!(!p.is_contract());
    }

    #[test]
    fn test_contract_principal_accepted() {
        let p = Principal::new(format!("{ADMIN}.exporter-registry_v2")).unwrap();
        assert!(p.is_contract());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Principal::new(""), Err(PrincipalError::Empty));
    }

    #[test]
    fn test_whitespace_rejected() {
        let err = Principal::new("ST1 ABC").unwrap_err();
        assert!(matches!(err, PrincipalError::InvalidCharacter { ch: ' ', .. }));
    }

    #[test]
    fn test_dangling_dot_rejected() {
        assert!(matches!(
            Principal::new(format!("{ADMIN}.")),
            Err(PrincipalError::MalformedContract(_))
        ));
        assert!(matches!(
            Principal::new(".registry"),
            Err(PrincipalError::MalformedContract(_))
        ));
    }

    #[test]
    fn test_second_dot_rejected() {
        let err = Principal::new(format!("{ADMIN}.a.b")).unwrap_err();
        assert!(matches!(err, PrincipalError::InvalidCharacter { ch: '.', .. }));
    }

    #[test]
    fn test_address_length_limit() {
        let long = "S".repeat(MAX_ADDRESS_LEN + 1);
        assert!(matches!(
            Principal::new(long),
            Err(PrincipalError::AddressTooLong { .. })
        ));
        assert!(Principal::new("S".repeat(MAX_ADDRESS_LEN)).is_ok());
    }

    #[test]
    fn test_contract_name_length_limit() {
        let long = format!("{ADMIN}.{}", "c".repeat(MAX_CONTRACT_NAME_LEN + 1));
        assert!(matches!(
            Principal::new(long),
            Err(PrincipalError::ContractNameTooLong { .. })
        ));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Principal::new("STA").unwrap();
        let b = Principal::new("STB").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_is_plain_string() {
        let p = Principal::new(ADMIN).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, format!("\"{ADMIN}\""));
        let parsed: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<Principal, _> = serde_json::from_str("\"not valid!\"");
        assert!(result.is_err());
    }
}
