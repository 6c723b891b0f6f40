//! Claim gate: the single switch deciding whether "claim" is interactive.

use crate::builder::build_mint_calls;
use crate::error::RewardError;
use quest_starknet::{Call, WalletExecutor};
use quest_types::{EligibleReward, QuestId};

/// Result of pressing the claim action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Nothing to claim, or a claim is already in flight.
    Disabled,
    /// The multicall was handed to the wallet.
    Submitted { calls: usize },
}

/// Mint multicall plus the flag gating the claim action.
///
/// Enabled iff the last rebuilt unclaimed set was non-empty. Claiming clears
/// the flag before the wallet is invoked; only the next [`ClaimGate::rebuild`]
/// (i.e. the next reconciliation pass) can set it again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimGate {
    calls: Vec<Call>,
    enabled: bool,
}

impl ClaimGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the multicall from a fresh unclaimed set.
    pub fn rebuild(&mut self, quest_id: QuestId, unclaimed: &[EligibleReward]) {
        self.calls = build_mint_calls(quest_id, unclaimed);
        self.enabled = !self.calls.is_empty();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Submit the multicall through `executor`.
    ///
    /// The gate stays closed afterwards whether or not the wallet succeeded.
    pub async fn claim<E: WalletExecutor>(
        &mut self,
        executor: &E,
    ) -> Result<ClaimOutcome, RewardError> {
        if !self.enabled {
            return Ok(ClaimOutcome::Disabled);
        }
        self.enabled = false;

        tracing::info!(calls = self.calls.len(), "submitting reward mint multicall");
        executor
            .execute(&self.calls)
            .await
            .map_err(RewardError::Claim)?;
        Ok(ClaimOutcome::Submitted {
            calls: self.calls.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_nullables::NullWalletExecutor;
    use quest_types::{Address, Felt};

    fn reward(task_id: u64) -> EligibleReward {
        EligibleReward {
            task_id,
            nft_contract: Address::new(Felt::from_u64(0x1)),
            token_id: Felt::from_u64(task_id),
            sig: [Felt::ZERO, Felt::ZERO],
        }
    }

    #[test]
    fn enabled_iff_unclaimed_non_empty() {
        let mut gate = ClaimGate::new();
        assert!(!gate.is_enabled());

        gate.rebuild(QuestId::new(1), &[reward(1)]);
        assert!(gate.is_enabled());
        assert_eq!(gate.calls().len(), 1);

        gate.rebuild(QuestId::new(1), &[]);
        assert!(!gate.is_enabled());
        assert!(gate.calls().is_empty());
    }

    #[tokio::test]
    async fn claim_disables_until_next_rebuild() {
        let wallet = NullWalletExecutor::new();
        let mut gate = ClaimGate::new();
        gate.rebuild(QuestId::new(1), &[reward(1), reward(2)]);

        let outcome = gate.claim(&wallet).await.unwrap();
        assert_eq!(outcome, ClaimOutcome::Submitted { calls: 2 });
        assert!(!gate.is_enabled());

        // A second press is a no-op.
        assert_eq!(gate.claim(&wallet).await.unwrap(), ClaimOutcome::Disabled);
        assert_eq!(wallet.executed().len(), 1);

        gate.rebuild(QuestId::new(1), &[reward(2)]);
        assert!(gate.is_enabled());
    }

    #[tokio::test]
    async fn rejected_claim_stays_disabled() {
        let wallet = NullWalletExecutor::new();
        wallet.reject();
        let mut gate = ClaimGate::new();
        gate.rebuild(QuestId::new(1), &[reward(1)]);

        let err = gate.claim(&wallet).await.unwrap_err();
        assert!(matches!(err, RewardError::Claim(_)));
        assert!(!gate.is_enabled());
    }
}
