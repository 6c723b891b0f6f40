//! Quest and task fetching.
//!
//! Tasks are personalised per address, but the wallet usually connects a
//! moment after the page opens. The task fetch therefore races a timer
//! against the wallet address:
//! - address already known, or arriving before the timer: fetch with it
//! - timer elapsing first: fetch anonymously
//!
//! Exactly one branch wins per trigger; the other is dropped with the
//! `select!`. A later address is a new trigger and fetches again.

use crate::cancel::CancelToken;
use quest_api::{ApiError, QuestApi};
use quest_types::{Address, QuestDocument, QuestId, TaskAddress, UserTask};

use std::time::Duration;
use tokio::sync::watch;

/// How long to wait for a wallet before fetching tasks anonymously.
pub const DEFAULT_ADDRESS_WAIT: Duration = Duration::from_millis(1000);

/// One committed task fetch.
#[derive(Debug)]
pub struct TaskFetch {
    pub address: TaskAddress,
    pub result: Result<Vec<UserTask>, ApiError>,
}

/// Fetches quest metadata and the task list of one quest.
pub struct QuestFetcher<A> {
    api: A,
    address_wait: Duration,
}

impl<A: QuestApi> QuestFetcher<A> {
    pub fn new(api: A) -> Self {
        Self::with_address_wait(api, DEFAULT_ADDRESS_WAIT)
    }

    pub fn with_address_wait(api: A, address_wait: Duration) -> Self {
        Self { api, address_wait }
    }

    pub async fn fetch_quest(&self, quest_id: QuestId) -> Result<QuestDocument, ApiError> {
        self.api.get_quest(quest_id).await
    }

    /// Decide which address the task list is fetched for.
    ///
    /// Returns `None` if `cancel` fires first.
    pub async fn resolve_task_address(
        &self,
        address: &mut watch::Receiver<Option<Address>>,
        cancel: &CancelToken,
    ) -> Option<TaskAddress> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            wallet = wait_for_address(address) => Some(TaskAddress::Wallet(wallet)),
            _ = tokio::time::sleep(self.address_wait) => {
                tracing::debug!(
                    wait_ms = self.address_wait.as_millis() as u64,
                    "no wallet address in time, fetching tasks anonymously"
                );
                Some(TaskAddress::Anonymous)
            }
        }
    }

    /// Resolve the address, then fetch the task list for it.
    ///
    /// Returns `None` when cancelled, either while waiting for the address
    /// or while the request was in flight.
    pub async fn fetch_tasks(
        &self,
        quest_id: QuestId,
        address: &mut watch::Receiver<Option<Address>>,
        cancel: &CancelToken,
    ) -> Option<TaskFetch> {
        let task_address = self.resolve_task_address(address, cancel).await?;
        let result = self.api.get_tasks(quest_id, &task_address).await;
        if cancel.is_cancelled() {
            tracing::debug!(quest = %quest_id, "task fetch superseded, dropping result");
            return None;
        }
        Some(TaskFetch {
            address: task_address,
            result,
        })
    }
}

/// Resolve with the first `Some` address. If the sender goes away without
/// ever providing one, never resolves.
async fn wait_for_address(rx: &mut watch::Receiver<Option<Address>>) -> Address {
    loop {
        if let Some(address) = *rx.borrow_and_update() {
            return address;
        }
        if rx.changed().await.is_err() {
            return std::future::pending().await;
        }
    }
}
