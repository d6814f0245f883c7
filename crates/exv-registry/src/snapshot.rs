//! # Registry Snapshots
//!
//! A snapshot is the whole registry state: the admin and every record,
//! keyed and ordered by principal. It is what the CLI keeps on disk
//! between calls, and its digest fingerprints the state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use exv_core::{sha256_digest, CanonicalBytes, ContentDigest, ExvError, Principal};

use crate::record::ExporterRecord;

/// Serializable copy of the registry state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// The admin at the time of the snapshot.
    pub admin: Principal,
    /// Every exporter record.
    #[serde(default)]
    pub exporters: BTreeMap<Principal, ExporterRecord>,
}

impl RegistrySnapshot {
    /// Empty state administered by `admin`.
    pub fn genesis(admin: Principal) -> Self {
        Self {
            admin,
            exporters: BTreeMap::new(),
        }
    }

    /// Parse a snapshot from JSON. Principals are validated on the way in.
    pub fn from_json(s: &str) -> Result<Self, ExvError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> Result<String, ExvError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 digest of the canonical (JCS) encoding.
    pub fn digest(&self) -> Result<ContentDigest, ExvError> {
        let cb = CanonicalBytes::new(self)?;
        Ok(sha256_digest(&cb))
    }
}
