//! # Exporter Registry
//!
//! The registry owns its store and an event log. Operations follow a
//! strict guard-then-mutate order: every guard is evaluated against the
//! store before the first write, so an `Err` return always means the store
//! is untouched.

use exv_core::Principal;

use crate::context::TxContext;
use crate::error::RegistryError;
use crate::event::{RegistryEvent, RegistryEventKind};
use crate::record::{ExporterRecord, ExporterStatus};
use crate::snapshot::RegistrySnapshot;
use crate::store::{MemoryStore, RegistryStore};

/// Admin-gated exporter registry over a [`RegistryStore`].
#[derive(Debug, Clone)]
pub struct ExporterRegistry<S = MemoryStore> {
    store: S,
    events: Vec<RegistryEvent>,
}

impl ExporterRegistry<MemoryStore> {
    /// Deploy a registry administered by `deployer`, with no exporters.
    pub fn new(deployer: Principal) -> Self {
        Self::with_store(MemoryStore::new(deployer))
    }

    /// Restore a registry from a snapshot. The event log starts empty.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        Self::with_store(MemoryStore::with_exporters(
            snapshot.admin,
            snapshot.exporters,
        ))
    }
}

impl<S: RegistryStore> ExporterRegistry<S> {
    /// Run the registry on top of an existing store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            events: Vec::new(),
        }
    }

    // ── Mutating operations ─────────────────────────────────────────

    /// Verify a new exporter (`verify-exporter`).
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotAuthorized`] if the sender is not the admin.
    /// - [`RegistryError::AlreadyVerified`] if the exporter has a record,
    ///   active or not.
    pub fn verify_exporter(
        &mut self,
        ctx: &TxContext,
        exporter: Principal,
        company_name: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<bool, RegistryError> {
        self.require_admin(ctx, "verify-exporter")?;
        if self.store.get_exporter(&exporter).is_some() {
            let err = RegistryError::AlreadyVerified { exporter };
            tracing::debug!(code = err.code().as_u32(), error = %err, "verify-exporter rejected");
            return Err(err);
        }

        let record = ExporterRecord::verified(company_name, country, ctx.block_height);
        tracing::info!(
            exporter = %exporter,
            company_name = %record.company_name,
            country = %record.country,
            height = %ctx.block_height,
            "exporter verified"
        );
        self.events.push(RegistryEvent {
            height: ctx.block_height,
            sender: ctx.sender.clone(),
            kind: RegistryEventKind::ExporterVerified {
                exporter: exporter.clone(),
                company_name: record.company_name.clone(),
                country: record.country.clone(),
            },
        });
        self.store.put_exporter(exporter, record);
        Ok(true)
    }

    /// Deactivate a verified exporter (`deactivate-exporter`).
    ///
    /// Deactivating an already-inactive exporter succeeds and leaves the
    /// record as it was.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotAuthorized`] if the sender is not the admin.
    /// - [`RegistryError::NotFound`] if the exporter has no record.
    pub fn deactivate_exporter(
        &mut self,
        ctx: &TxContext,
        exporter: &Principal,
    ) -> Result<bool, RegistryError> {
        self.require_admin(ctx, "deactivate-exporter")?;
        let Some(record) = self.store.get_exporter(exporter) else {
            let err = RegistryError::NotFound {
                exporter: exporter.clone(),
            };
            tracing::debug!(code = err.code().as_u32(), error = %err, "deactivate-exporter rejected");
            return Err(err);
        };

        let was_active = record.is_active;
        tracing::info!(
            exporter = %exporter,
            was_active,
            height = %ctx.block_height,
            "exporter deactivated"
        );
        self.events.push(RegistryEvent {
            height: ctx.block_height,
            sender: ctx.sender.clone(),
            kind: RegistryEventKind::ExporterDeactivated {
                exporter: exporter.clone(),
                was_active,
            },
        });
        self.store.put_exporter(exporter.clone(), record.deactivated());
        Ok(true)
    }

    /// Hand the admin role to `new_admin` (`transfer-admin`).
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotAuthorized`] if the sender is not the admin.
    pub fn transfer_admin(
        &mut self,
        ctx: &TxContext,
        new_admin: Principal,
    ) -> Result<bool, RegistryError> {
        self.require_admin(ctx, "transfer-admin")?;
        let previous = self.store.admin();
        tracing::info!(
            previous = %previous,
            current = %new_admin,
            height = %ctx.block_height,
            "registry admin transferred"
        );
        self.events.push(RegistryEvent {
            height: ctx.block_height,
            sender: ctx.sender.clone(),
            kind: RegistryEventKind::AdminTransferred {
                previous,
                current: new_admin.clone(),
            },
        });
        self.store.set_admin(new_admin);
        Ok(true)
    }

    // ── Read-only operations ────────────────────────────────────────

    /// Whether an exporter's verification is in force
    /// (`is-verified-exporter`). Needs no authorization.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the exporter was never verified.
    pub fn is_verified_exporter(&self, exporter: &Principal) -> Result<bool, RegistryError> {
        self.store
            .get_exporter(exporter)
            .map(|record| record.is_active)
            .ok_or_else(|| RegistryError::NotFound {
                exporter: exporter.clone(),
            })
    }

    /// The full record for an exporter, if one exists.
    pub fn get_exporter(&self, exporter: &Principal) -> Option<ExporterRecord> {
        self.store.get_exporter(exporter)
    }

    /// Status of an exporter, or `None` if unregistered.
    pub fn status(&self, exporter: &Principal) -> Option<ExporterStatus> {
        self.store.get_exporter(exporter).map(|r| r.status())
    }

    /// The current admin.
    pub fn admin(&self) -> Principal {
        self.store.admin()
    }

    /// Committed transitions since this registry value was created.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Copy of the full registry state.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            admin: self.store.admin(),
            exporters: self.store.exporters().into_iter().collect(),
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the registry, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn require_admin(&self, ctx: &TxContext, op: &'static str) -> Result<(), RegistryError> {
        if ctx.sender == self.store.admin() {
            return Ok(());
        }
        let err = RegistryError::NotAuthorized {
            sender: ctx.sender.clone(),
        };
        tracing::debug!(op, code = err.code().as_u32(), error = %err, "call rejected");
        Err(err)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
