//! Eligible rewards grouped by issuing contract.

use quest_types::{Address, EligibleReward};

/// Mapping from NFT contract to its eligible rewards.
///
/// Contracts keep the order in which they were first seen; rewards keep
/// their order within a contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardGroups {
    groups: Vec<(Address, Vec<EligibleReward>)>,
}

impl RewardGroups {
    pub fn split_by_contract(rewards: impl IntoIterator<Item = EligibleReward>) -> Self {
        let mut groups: Vec<(Address, Vec<EligibleReward>)> = Vec::new();
        for reward in rewards {
            match groups
                .iter_mut()
                .find(|(contract, _)| *contract == reward.nft_contract)
            {
                Some((_, list)) => list.push(reward),
                None => groups.push((reward.nft_contract, vec![reward])),
            }
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &[EligibleReward])> {
        self.groups
            .iter()
            .map(|(contract, rewards)| (contract, rewards.as_slice()))
    }

    pub fn get(&self, contract: &Address) -> Option<&[EligibleReward]> {
        self.iter()
            .find(|(c, _)| *c == contract)
            .map(|(_, rewards)| rewards)
    }

    /// Number of contracts.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rewards across all contracts.
    pub fn reward_count(&self) -> usize {
        self.groups.iter().map(|(_, rewards)| rewards.len()).sum()
    }
}
