//! Nullable wallet: record multicalls without signing them.

use quest_starknet::{Call, StarknetError, WalletExecutor};
use std::cell::RefCell;

/// A test wallet that records every executed multicall.
pub struct NullWalletExecutor {
    executed: RefCell<Vec<Vec<Call>>>,
    failing: RefCell<bool>,
}

impl NullWalletExecutor {
    pub fn new() -> Self {
        Self {
            executed: RefCell::new(Vec::new()),
            failing: RefCell::new(false),
        }
    }

    /// Make every execution fail (the user rejected the transaction).
    pub fn reject(&self) {
        *self.failing.borrow_mut() = true;
    }

    /// All multicalls "executed" (for assertions).
    pub fn executed(&self) -> Vec<Vec<Call>> {
        self.executed.borrow().clone()
    }
}

impl Default for NullWalletExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletExecutor for NullWalletExecutor {
    async fn execute(&self, calls: &[Call]) -> Result<(), StarknetError> {
        self.executed.borrow_mut().push(calls.to_vec());
        if *self.failing.borrow() {
            return Err(StarknetError::Wallet("user rejected transaction".into()));
        }
        Ok(())
    }
}
