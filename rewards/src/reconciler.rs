//! Eligibility reconciliation: off-chain eligibility cross-checked against
//! on-chain claim status.

use crate::error::RewardError;
use crate::groups::RewardGroups;
use futures_util::future::try_join_all;
use quest_api::QuestApi;
use quest_starknet::{RewardContract, TaskStatusQuery};
use quest_types::{Address, EligibleReward, QuestDocument, QuestId};

/// Status a reward contract reports for a task whose reward was not minted.
pub const NOT_CLAIMED: u64 = 0;

/// Outcome of one successful reconciliation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub eligible: RewardGroups,
    pub unclaimed: Vec<EligibleReward>,
}

/// Keep `rewards[i]` iff `statuses[i] == NOT_CLAIMED`.
///
/// A reward without a status (short status list) is not kept.
pub fn unclaimed_in_group(rewards: &[EligibleReward], statuses: &[u64]) -> Vec<EligibleReward> {
    rewards
        .iter()
        .enumerate()
        .filter(|(i, _)| statuses.get(*i) == Some(&NOT_CLAIMED))
        .map(|(_, reward)| reward.clone())
        .collect()
}

/// Computes the unclaimed reward set for a quest and address.
pub struct EligibilityReconciler<A, C> {
    api: A,
    contracts: C,
}

impl<A: QuestApi, C: RewardContract> EligibilityReconciler<A, C> {
    pub fn new(api: A, contracts: C) -> Self {
        Self { api, contracts }
    }

    /// Fetch and group the rewards `address` is eligible for.
    ///
    /// Without an address or a rewards endpoint there is nothing to fetch and
    /// the result is empty; no request is sent.
    pub async fn fetch_eligible(
        &self,
        quest: &QuestDocument,
        address: Option<&Address>,
    ) -> Result<RewardGroups, RewardError> {
        let (Some(address), Some(endpoint)) = (address, quest.rewards_endpoint()) else {
            return Ok(RewardGroups::default());
        };
        let rewards = self.api.get_eligible_rewards(endpoint, address).await?;
        tracing::debug!(quest = quest.id, eligible = rewards.len(), "eligible rewards fetched");
        Ok(RewardGroups::split_by_contract(rewards))
    }

    /// Check every contract group on chain and return the unclaimed rewards,
    /// in group order then in-group order.
    ///
    /// Contracts are queried concurrently; any failure fails the whole pass.
    pub async fn filter_unclaimed(
        &self,
        quest_id: QuestId,
        address: &Address,
        groups: &RewardGroups,
    ) -> Result<Vec<EligibleReward>, RewardError> {
        let checks = groups.iter().map(|(contract, rewards)| async move {
            let queries: Vec<TaskStatusQuery> = rewards
                .iter()
                .map(|reward| TaskStatusQuery {
                    quest_id,
                    task_id: reward.task_id,
                    user: *address,
                })
                .collect();
            let statuses = self.contracts.get_tasks_status(contract, &queries).await?;
            if statuses.len() != rewards.len() {
                tracing::warn!(
                    %contract,
                    rewards = rewards.len(),
                    statuses = statuses.len(),
                    "status count does not match reward count"
                );
            }
            Ok::<_, RewardError>(unclaimed_in_group(rewards, &statuses))
        });

        let per_group = try_join_all(checks).await?;
        Ok(per_group.into_iter().flatten().collect())
    }

    /// Run a whole pass: fetch, group, check on chain.
    pub async fn reconcile(
        &self,
        quest_id: QuestId,
        quest: &QuestDocument,
        address: Option<&Address>,
    ) -> Result<Reconciliation, RewardError> {
        let eligible = self.fetch_eligible(quest, address).await?;
        let unclaimed = match address {
            Some(address) if !eligible.is_empty() => {
                self.filter_unclaimed(quest_id, address, &eligible).await?
            }
            _ => Vec::new(),
        };
        tracing::debug!(
            quest = %quest_id,
            contracts = eligible.len(),
            unclaimed = unclaimed.len(),
            "reconciliation pass complete"
        );
        Ok(Reconciliation {
            eligible,
            unclaimed,
        })
    }
}
