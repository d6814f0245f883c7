//! # Exporter Record
//!
//! The value stored per exporter. `company_name`, `country` and
//! `verification_date` are fixed at verification; only `is_active`
//! changes afterwards.

use serde::{Deserialize, Serialize};

use exv_core::BlockHeight;

/// Derived status of a registered exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExporterStatus {
    /// Verified and currently active.
    Active,
    /// Verified, then deactivated.
    Inactive,
}

impl std::fmt::Display for ExporterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        };
        f.write_str(s)
    }
}

/// Verification record for a single exporter.
///
/// Field names serialize in kebab-case (`company-name`, `is-active`, ...),
/// matching the ledger's tuple keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExporterRecord {
    /// Registered company name.
    pub company_name: String,
    /// Country of registration.
    pub country: String,
    /// Ledger height at which the exporter was verified.
    pub verification_date: BlockHeight,
    /// Whether the verification is currently in force.
    pub is_active: bool,
}

impl ExporterRecord {
    /// A freshly verified, active record.
    pub fn verified(
        company_name: impl Into<String>,
        country: impl Into<String>,
        verification_date: BlockHeight,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            country: country.into(),
            verification_date,
            is_active: true,
        }
    }

    /// This record with `is_active` cleared and every other field carried
    /// forward unchanged.
    pub fn deactivated(&self) -> Self {
        Self {
            is_active: false,
            ..self.clone()
        }
    }

    /// Current status of the record.
    pub fn status(&self) -> ExporterStatus {
        if self.is_active {
            ExporterStatus::Active
        } else {
            ExporterStatus::Inactive
        }
    }
}
