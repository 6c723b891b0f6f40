//! Mint multicall building.

use quest_starknet::contracts::MINT;
use quest_starknet::Call;
use quest_types::{EligibleReward, Felt, QuestId};

/// Build one `mint` call per unclaimed reward, in order.
///
/// Calldata: `[token_id.low, token_id.high = 0, quest_id, task_id, sig_r, sig_s]`.
pub fn build_mint_calls(quest_id: QuestId, unclaimed: &[EligibleReward]) -> Vec<Call> {
    unclaimed
        .iter()
        .map(|reward| {
            Call::new(
                reward.nft_contract,
                MINT,
                vec![
                    reward.token_id,
                    Felt::ZERO,
                    Felt::from_u64(quest_id.as_u64()),
                    Felt::from_u64(reward.task_id),
                    reward.sig[0],
                    reward.sig[1],
                ],
            )
        })
        .collect()
}
