//! # Registry Store
//!
//! The key/value surface the registry needs from its host: one admin
//! variable and one exporter map. A ledger runtime would back this with
//! its own storage; [`MemoryStore`] backs it with a `BTreeMap`.
//!
//! The trait has no delete operation. Records are never removed once
//! written.

use std::collections::BTreeMap;

use exv_core::Principal;

use crate::record::ExporterRecord;

/// Storage backend for the registry.
///
/// Implementations must give read-your-writes semantics: a value written
/// by `put_exporter` or `set_admin` is visible to the next read.
pub trait RegistryStore {
    /// The current admin.
    fn admin(&self) -> Principal;

    /// Replace the admin.
    fn set_admin(&mut self, admin: Principal);

    /// Look up an exporter record.
    fn get_exporter(&self, exporter: &Principal) -> Option<ExporterRecord>;

    /// Insert or replace an exporter record.
    fn put_exporter(&mut self, exporter: Principal, record: ExporterRecord);

    /// All records, ordered by principal.
    fn exporters(&self) -> Vec<(Principal, ExporterRecord)>;
}

/// In-memory store. Iteration order is the principal ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    admin: Principal,
    exporters: BTreeMap<Principal, ExporterRecord>,
}

impl MemoryStore {
    /// An empty store administered by `admin`.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            exporters: BTreeMap::new(),
        }
    }

    /// A store pre-populated with records.
    pub fn with_exporters(admin: Principal, exporters: BTreeMap<Principal, ExporterRecord>) -> Self {
        Self { admin, exporters }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    /// Whether no exporter has ever been verified.
    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }
}

impl RegistryStore for MemoryStore {
    fn admin(&self) -> Principal {
        self.admin.clone()
    }

    fn set_admin(&mut self, admin: Principal) {
        self.admin = admin;
    }

    fn get_exporter(&self, exporter: &Principal) -> Option<ExporterRecord> {
        self.exporters.get(exporter).cloned()
    }

    fn put_exporter(&mut self, exporter: Principal, record: ExporterRecord) {
        self.exporters.insert(exporter, record);
    }

    fn exporters(&self) -> Vec<(Principal, ExporterRecord)> {
        self.exporters
            .iter()
            .map(|(p, r)| (p.clone(), r.clone()))
            .collect()
    }
}
