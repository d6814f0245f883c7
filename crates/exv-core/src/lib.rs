//! # exv-core — Foundational Types for the Exporter Registry
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on: ledger identities, ledger heights, canonical bytes, and the
//! content digest computed over them.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for ledger primitives.** `Principal` and
//!    `BlockHeight` are newtypes. A principal can only be built through a
//!    validating constructor, so no bare strings reach the registry.
//!
//! 2. **`CanonicalBytes` newtype.** Every digest flows through
//!    `CanonicalBytes::new()`. Two equal registry states always hash to the
//!    same bytes.
//!
//! 3. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that digest paths flow through canonicalization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `exv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod height;
pub mod identity;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::{CanonicalizationError, ExvError, PrincipalError};
pub use height::BlockHeight;
pub use identity::Principal;
