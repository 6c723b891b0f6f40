//! Off-chain reward claim assertions.

use crate::address::Address;
use crate::felt::Felt;
use serde::{Deserialize, Serialize};

/// An assertion, signed by the quest's reward authority, that the reward for
/// `task_id` may be minted on `nft_contract`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleReward {
    pub task_id: u64,
    pub nft_contract: Address,
    pub token_id: Felt,
    /// Signature pair `(r, s)`.
    pub sig: [Felt; 2],
}
