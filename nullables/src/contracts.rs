//! Nullable contracts: configured on-chain state, recorded reads.

use quest_starknet::{IdentityRegistry, RewardContract, StarknetError, TaskStatusQuery};
use quest_types::{Address, Felt};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// A test reward contract set.
///
/// Each contract address maps to a list of statuses returned verbatim. A
/// contract without configured statuses reports every queried task as
/// unclaimed.
pub struct NullRewardContract {
    statuses: RefCell<HashMap<Address, Vec<u64>>>,
    failing: RefCell<HashSet<Address>>,
    calls: RefCell<Vec<(Address, Vec<TaskStatusQuery>)>>,
}

impl NullRewardContract {
    pub fn new() -> Self {
        Self {
            statuses: RefCell::new(HashMap::new()),
            failing: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_statuses(self, contract: Address, statuses: Vec<u64>) -> Self {
        self.set_statuses(contract, statuses);
        self
    }

    pub fn set_statuses(&self, contract: Address, statuses: Vec<u64>) {
        self.statuses.borrow_mut().insert(contract, statuses);
    }

    /// Make every read of `contract` fail.
    pub fn fail(&self, contract: Address) {
        self.failing.borrow_mut().insert(contract);
    }

    /// All status reads so far (for assertions).
    pub fn calls(&self) -> Vec<(Address, Vec<TaskStatusQuery>)> {
        self.calls.borrow().clone()
    }
}

impl Default for NullRewardContract {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardContract for NullRewardContract {
    async fn get_tasks_status(
        &self,
        contract: &Address,
        queries: &[TaskStatusQuery],
    ) -> Result<Vec<u64>, StarknetError> {
        self.calls.borrow_mut().push((*contract, queries.to_vec()));
        if self.failing.borrow().contains(contract) {
            return Err(StarknetError::Unreachable(format!(
                "canned failure for {contract}"
            )));
        }
        Ok(self
            .statuses
            .borrow()
            .get(contract)
            .cloned()
            .unwrap_or_else(|| vec![0; queries.len()]))
    }
}

/// A test identity registry.
pub struct NullIdentityRegistry {
    data: RefCell<HashMap<(Felt, String), Felt>>,
    failing: RefCell<bool>,
    calls: RefCell<usize>,
}

impl NullIdentityRegistry {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
            failing: RefCell::new(false),
            calls: RefCell::new(0),
        }
    }

    pub fn with_data(self, token_id: Felt, field: &str, value: Felt) -> Self {
        self.data
            .borrow_mut()
            .insert((token_id, field.to_string()), value);
        self
    }

    /// Make every read fail.
    pub fn fail(&self) {
        *self.failing.borrow_mut() = true;
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl Default for NullIdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityRegistry for NullIdentityRegistry {
    async fn get_verifier_data(&self, token_id: &Felt, field: &str) -> Result<Felt, StarknetError> {
        *self.calls.borrow_mut() += 1;
        if *self.failing.borrow() {
            return Err(StarknetError::Unreachable("canned failure".into()));
        }
        Ok(self
            .data
            .borrow()
            .get(&(*token_id, field.to_string()))
            .copied()
            .unwrap_or(Felt::ZERO))
    }
}
