//! Typed bindings for the contracts the quest page reads.

use crate::error::StarknetError;
use crate::rpc::ContractReader;
use quest_types::{Address, Felt, QuestId};

/// Batch status read on a quest NFT contract.
pub const GET_TASKS_STATUS: &str = "get_tasks_status";

/// Reward mint entry point on a quest NFT contract.
pub const MINT: &str = "mint";

/// Verifier data read on the Starknet ID identity contract.
pub const GET_VERIFIER_DATA: &str = "get_verifier_data";

/// One `(quest, task, user)` tuple of a status batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskStatusQuery {
    pub quest_id: QuestId,
    pub task_id: u64,
    pub user: Address,
}

/// Reward contracts: report, per task, whether its reward was minted.
#[allow(async_fn_in_trait)]
pub trait RewardContract {
    /// Returns one status per query, in query order. `0` means not claimed.
    async fn get_tasks_status(
        &self,
        contract: &Address,
        queries: &[TaskStatusQuery],
    ) -> Result<Vec<u64>, StarknetError>;
}

impl<T: RewardContract + ?Sized> RewardContract for &T {
    async fn get_tasks_status(
        &self,
        contract: &Address,
        queries: &[TaskStatusQuery],
    ) -> Result<Vec<u64>, StarknetError> {
        (**self).get_tasks_status(contract, queries).await
    }
}

/// Social verification registry keyed by identity token.
#[allow(async_fn_in_trait)]
pub trait IdentityRegistry {
    /// Data a verifier wrote for `token_id` under `field`; zero when unset.
    async fn get_verifier_data(&self, token_id: &Felt, field: &str) -> Result<Felt, StarknetError>;
}

impl<T: IdentityRegistry + ?Sized> IdentityRegistry for &T {
    async fn get_verifier_data(&self, token_id: &Felt, field: &str) -> Result<Felt, StarknetError> {
        (**self).get_verifier_data(token_id, field).await
    }
}

/// Quest NFT contract binding over any [`ContractReader`].
pub struct QuestNftClient<R> {
    reader: R,
}

impl<R: ContractReader> QuestNftClient<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: ContractReader> RewardContract for QuestNftClient<R> {
    async fn get_tasks_status(
        &self,
        contract: &Address,
        queries: &[TaskStatusQuery],
    ) -> Result<Vec<u64>, StarknetError> {
        let calldata = encode_status_queries(queries);
        let result = self
            .reader
            .call(contract, GET_TASKS_STATUS, &calldata)
            .await?;
        decode_status_array(&result)
    }
}

/// Encode a batch as a Cairo array of structs: `[len, quest, task, user, ...]`.
pub fn encode_status_queries(queries: &[TaskStatusQuery]) -> Vec<Felt> {
    let mut calldata = Vec::with_capacity(1 + queries.len() * 3);
    calldata.push(Felt::from_u64(queries.len() as u64));
    for query in queries {
        calldata.push(Felt::from_u64(query.quest_id.as_u64()));
        calldata.push(Felt::from_u64(query.task_id));
        calldata.push(*query.user.as_felt());
    }
    calldata
}

/// Decode `[len, s0, s1, ...]`. A status too wide for `u64` is certainly not
/// zero and saturates.
pub fn decode_status_array(result: &[Felt]) -> Result<Vec<u64>, StarknetError> {
    let (len, statuses) = result
        .split_first()
        .ok_or_else(|| StarknetError::InvalidResponse("empty status array".to_string()))?;
    let len = len
        .to_u64()
        .and_then(|l| usize::try_from(l).ok())
        .ok_or_else(|| StarknetError::InvalidResponse(format!("bad array length {len}")))?;
    if statuses.len() < len {
        return Err(StarknetError::InvalidResponse(format!(
            "status array declares {len} entries, got {}",
            statuses.len()
        )));
    }
    Ok(statuses[..len]
        .iter()
        .map(|s| s.to_u64().unwrap_or(u64::MAX))
        .collect())
}

/// Starknet ID identity contract binding over any [`ContractReader`].
pub struct StarknetIdClient<R> {
    reader: R,
    identity_contract: Address,
    verifier_contract: Address,
}

impl<R: ContractReader> StarknetIdClient<R> {
    pub fn new(reader: R, identity_contract: Address, verifier_contract: Address) -> Self {
        Self {
            reader,
            identity_contract,
            verifier_contract,
        }
    }
}

impl<R: ContractReader> IdentityRegistry for StarknetIdClient<R> {
    async fn get_verifier_data(&self, token_id: &Felt, field: &str) -> Result<Felt, StarknetError> {
        let calldata = [
            *token_id,
            Felt::from_short_string(field)?,
            *self.verifier_contract.as_felt(),
        ];
        let result = self
            .reader
            .call(&self.identity_contract, GET_VERIFIER_DATA, &calldata)
            .await?;
        result
            .first()
            .copied()
            .ok_or_else(|| StarknetError::InvalidResponse("empty verifier data".to_string()))
    }
}
