//! # Call Context
//!
//! The ambient values the ledger supplies with every mutating call.

use serde::{Deserialize, Serialize};

use exv_core::{BlockHeight, Principal};

/// Sender and height of the call being executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    /// Principal that signed the call.
    pub sender: Principal,
    /// Ledger height at which the call executes.
    pub block_height: BlockHeight,
}

impl TxContext {
    /// Context for a call by `sender` at `block_height`.
    pub fn new(sender: Principal, block_height: impl Into<BlockHeight>) -> Self {
        Self {
            sender,
            block_height: block_height.into(),
        }
    }
}
