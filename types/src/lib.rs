//! Fundamental types for Starknet Quest.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! field elements, addresses, quest documents, tasks, eligible rewards and the
//! explicit loading state used by the page layer.

pub mod address;
pub mod error;
pub mod felt;
pub mod loadable;
pub mod quest;
pub mod reward;
pub mod task;

pub use address::{Address, TaskAddress};
pub use error::TypesError;
pub use felt::Felt;
pub use loadable::Loadable;
pub use quest::{NftItem, QueryError, QuestDocument, QuestId};
pub use reward::EligibleReward;
pub use task::UserTask;
