//! Starknet bindings for Starknet Quest.
//!
//! Provides:
//! - Entry point selector hashing (Starknet keccak)
//! - A JSON-RPC contract reader (`starknet_call`)
//! - Typed bindings for the quest NFT contract and the Starknet ID identity registry
//! - The multicall descriptor handed to the wallet, and the wallet execution seam

pub mod call;
pub mod contracts;
pub mod error;
pub mod executor;
pub mod rpc;
pub mod selector;

pub use call::Call;
pub use contracts::{
    IdentityRegistry, QuestNftClient, RewardContract, StarknetIdClient, TaskStatusQuery,
};
pub use error::StarknetError;
pub use executor::WalletExecutor;
pub use rpc::{ContractReader, StarknetRpcClient};
pub use selector::get_selector_from_name;
