use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("quest backend error: {0}")]
    Api(#[from] quest_api::ApiError),

    #[error("rewards error: {0}")]
    Rewards(#[from] quest_rewards::RewardError),

    #[error("starknet error: {0}")]
    Starknet(#[from] quest_starknet::StarknetError),

    #[error("config error: {0}")]
    Config(String),

    #[error("session storage error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no wallet connected")]
    NoAddress,

    #[error("task {0} is not part of this quest")]
    UnknownTask(u64),
}
