//! # Registry Events
//!
//! Ordered log of committed transitions. Rejected calls append nothing.

use serde::{Deserialize, Serialize};

use exv_core::{BlockHeight, Principal};

/// What a committed call changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RegistryEventKind {
    /// A new exporter record was created.
    ExporterVerified {
        /// The verified exporter.
        exporter: Principal,
        /// Registered company name.
        company_name: String,
        /// Country of registration.
        country: String,
    },
    /// An exporter was deactivated.
    ExporterDeactivated {
        /// The deactivated exporter.
        exporter: Principal,
        /// Whether the record was active before this call. `false` means
        /// the call was a repeat and the record did not change.
        was_active: bool,
    },
    /// The admin role moved to another principal.
    AdminTransferred {
        /// Admin before the call.
        previous: Principal,
        /// Admin after the call.
        current: Principal,
    },
}

/// A committed registry transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEvent {
    /// Height at which the call committed.
    pub height: BlockHeight,
    /// Principal that made the call.
    pub sender: Principal,
    /// What changed.
    #[serde(flatten)]
    pub kind: RegistryEventKind,
}
