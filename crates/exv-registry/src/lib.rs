//! # exv-registry — Exporter Verification Registry
//!
//! An admin-gated registry that verifies and deactivates exporters. The
//! hosting ledger supplies the caller, the current height, and a key/value
//! store; this crate supplies the state machine on top of them.
//!
//! ## State Machine (per exporter)
//!
//! ```text
//! Unregistered ──verify──▶ Verified(active) ──deactivate──▶ Verified(inactive)
//!                                                              │      ▲
//!                                                              └──────┘
//!                                                             deactivate
//! ```
//!
//! There is no path back to `Unregistered` and no reactivation.
//!
//! ## Guards
//!
//! Every mutating operation checks its guards before touching the store,
//! in a fixed order, so a rejected call never leaves partial effects:
//!
//! | Operation              | Guard 1                  | Guard 2                    |
//! |------------------------|--------------------------|----------------------------|
//! | `verify_exporter`      | sender is admin (`u1`)   | no record yet (`u2`)       |
//! | `deactivate_exporter`  | sender is admin (`u1`)   | record exists (`u3`)       |
//! | `transfer_admin`       | sender is admin (`u1`)   |                            |
//! | `is_verified_exporter` |                          | record exists (`u3`)       |
//!
//! ## Concurrency
//!
//! Mutating operations take `&mut self`. The ledger totally orders calls,
//! and the borrow checker enforces the same single-writer discipline
//! in-process, so there is no locking here.

pub mod context;
pub mod error;
pub mod event;
pub mod record;
pub mod registry;
pub mod response;
pub mod snapshot;
pub mod store;

pub use context::TxContext;
pub use error::{ErrorCode, RegistryError, UnknownErrorCode};
pub use event::{RegistryEvent, RegistryEventKind};
pub use record::{ExporterRecord, ExporterStatus};
pub use registry::ExporterRegistry;
pub use response::CallResponse;
pub use snapshot::RegistrySnapshot;
pub use store::{MemoryStore, RegistryStore};
