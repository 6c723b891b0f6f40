//! Quest page logic for Starknet Quest.
//!
//! Ties the backend client, the reward reconciler and the contract bindings
//! into one page controller:
//! - [`fetcher`]: quest and task fetching, with the wallet/timer race for tasks
//! - [`verifier`]: social verification status and the badge derived from it
//! - [`session`]: the token hand-off across navigation
//! - [`page`]: the controller owning all page state
//! - [`view`]: what the page draws, loading placeholders included
//! - [`config`]: TOML client configuration

pub mod cancel;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod page;
pub mod session;
pub mod verifier;
pub mod view;

pub use cancel::{cancel_pair, CancelToken, Canceller};
pub use config::ClientConfig;
pub use error::PageError;
pub use fetcher::{QuestFetcher, TaskFetch, DEFAULT_ADDRESS_WAIT};
pub use page::QuestPage;
pub use session::{
    pending_verification, start_verification, FileSessionStore, MemorySessionStore, Navigator,
    SessionStore, TOKEN_ID_KEY,
};
pub use verifier::{BadgeAction, SocialBadge, VerifierStatusClient, DISCORD};
pub use view::{NftShowcase, QuestView, RewardView, Slot, TaskSection, TaskView};
