use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewardError {
    #[error("rewards endpoint error: {0}")]
    Api(#[from] quest_api::ApiError),

    #[error("reward contract error: {0}")]
    Contract(#[from] quest_starknet::StarknetError),

    #[error("claim failed: {0}")]
    Claim(quest_starknet::StarknetError),
}

impl RewardError {
    /// Whether the rewards endpoint answered with the wrong shape, as opposed
    /// to the pass being rejected by the network or a contract.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_malformed())
    }
}
