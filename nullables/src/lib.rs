//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the quest page (backend REST API, reward
//! contracts, identity registry, wallet) is abstracted behind a trait. This
//! crate provides in-memory implementations that:
//! - Return canned values configured by the test
//! - Record every request so tests can assert on what was (not) sent
//! - Never touch the network
//!
//! All doubles use interior mutability without locks: the quest page runs on a
//! single logical thread.

pub mod api;
pub mod contracts;
pub mod wallet;

pub use api::{ApiRequest, Canned, NullQuestApi};
pub use contracts::{NullIdentityRegistry, NullRewardContract};
pub use wallet::NullWalletExecutor;
