//! REST client for the Starknet Quest backend.
//!
//! Endpoints consumed (all `GET`, JSON):
//! - `/api/get_quest?id={quest_id}` → quest document or `{error}`
//! - `/api/get_tasks?quest_id={id}&addr={decimal address | "O"}` → task list or `{error}`
//! - `{rewards_endpoint}?addr={decimal address}` → `{rewards: [...]}`
//! - `{verify_endpoint}?address={hex address}` → `{res: bool}` or `{error}`
//!
//! The [`QuestApi`] trait is the seam the page layer is written against;
//! tests swap in the in-memory implementation from `quest-nullables`.

pub mod client;
pub mod error;

pub use client::{HttpQuestApi, QuestApi, VerifyOutcome};
pub use error::ApiError;
