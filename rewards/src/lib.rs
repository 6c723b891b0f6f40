//! Reward eligibility reconciliation and claiming.
//!
//! A reconciliation pass:
//! 1. Fetches the rewards an address is eligible for from the quest's rewards endpoint
//! 2. Groups them by NFT contract, in first-seen order
//! 3. Asks each contract which of its rewards were already minted
//! 4. Keeps, index for index, the rewards whose status is "not claimed" (0)
//!
//! The unclaimed set then feeds the mint multicall and the claim gate, which
//! decides whether the claim action is interactive.

pub mod builder;
pub mod claim;
pub mod error;
pub mod groups;
pub mod reconciler;

pub use builder::build_mint_calls;
pub use claim::{ClaimGate, ClaimOutcome};
pub use error::RewardError;
pub use groups::RewardGroups;
pub use reconciler::{unclaimed_in_group, EligibilityReconciler, Reconciliation, NOT_CLAIMED};
