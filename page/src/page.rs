//! Quest page controller.
//!
//! Owns all page state and serializes every update through `&mut self`; the
//! page runs on a single logical thread and holds no locks.
//!
//! Rewards depend on the loaded quest and the wallet address. Operations that
//! change either return `true` when rewards are stale, and the caller runs
//! [`QuestPage::refresh_rewards`] in response.

use crate::cancel::CancelToken;
use crate::error::PageError;
use crate::fetcher::{QuestFetcher, DEFAULT_ADDRESS_WAIT};
use crate::view::QuestView;

use quest_api::{QuestApi, VerifyOutcome};
use quest_rewards::{ClaimGate, ClaimOutcome, EligibilityReconciler, RewardGroups};
use quest_starknet::{Call, RewardContract, WalletExecutor};
use quest_types::{Address, EligibleReward, Loadable, QuestDocument, QuestId, TaskAddress, UserTask};

use std::time::Duration;
use tokio::sync::watch;

pub struct QuestPage<A, C, W> {
    quest_id: QuestId,
    api: A,
    contracts: C,
    wallet: W,
    address_wait: Duration,
    address: Option<Address>,
    quest: Loadable<QuestDocument>,
    tasks: Loadable<Vec<UserTask>>,
    eligible: RewardGroups,
    unclaimed: Vec<EligibleReward>,
    gate: ClaimGate,
}

impl<A: QuestApi, C: RewardContract, W: WalletExecutor> QuestPage<A, C, W> {
    pub fn new(quest_id: QuestId, api: A, contracts: C, wallet: W) -> Self {
        Self {
            quest_id,
            api,
            contracts,
            wallet,
            address_wait: DEFAULT_ADDRESS_WAIT,
            address: None,
            quest: Loadable::Loading,
            tasks: Loadable::Loading,
            eligible: RewardGroups::default(),
            unclaimed: Vec::new(),
            gate: ClaimGate::new(),
        }
    }

    pub fn with_address_wait(mut self, address_wait: Duration) -> Self {
        self.address_wait = address_wait;
        self
    }

    /// Record the connected wallet. Returns whether it changed.
    ///
    /// Disconnecting empties the reward state immediately: an absent address
    /// never fetches rewards.
    pub fn set_address(&mut self, address: Option<Address>) -> bool {
        if self.address == address {
            return false;
        }
        self.address = address;
        if address.is_none() {
            self.eligible = RewardGroups::default();
            self.unclaimed.clear();
            self.gate.rebuild(self.quest_id, &self.unclaimed);
        }
        true
    }

    /// Fetch the quest document. Returns whether a new document was committed.
    ///
    /// A malformed response is dropped and leaves the page as it was. Other
    /// failures leave it as well, but are returned.
    pub async fn load_quest(&mut self) -> Result<bool, PageError> {
        let fetcher = QuestFetcher::new(&self.api);
        match fetcher.fetch_quest(self.quest_id).await {
            Ok(quest) if quest.is_well_formed() => {
                self.quest.commit(quest);
                Ok(true)
            }
            Ok(_) => {
                tracing::debug!(quest = %self.quest_id, "quest document without a name, discarding");
                self.quest.discard("quest document without a name");
                Ok(false)
            }
            Err(e) if e.is_malformed() => {
                tracing::debug!(quest = %self.quest_id, error = %e, "discarding quest response");
                self.quest.discard(e.to_string());
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(quest = %self.quest_id, error = %e, "quest fetch failed");
                self.quest.discard(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Race the wallet feed against the address timer and fetch the task list.
    ///
    /// Returns whether rewards are stale: the race resolved to a wallet address
    /// different from the current one. A cancelled fetch commits nothing.
    pub async fn load_tasks(
        &mut self,
        address: &mut watch::Receiver<Option<Address>>,
        cancel: &CancelToken,
    ) -> Result<bool, PageError> {
        let fetcher = QuestFetcher::with_address_wait(&self.api, self.address_wait);
        let Some(fetch) = fetcher.fetch_tasks(self.quest_id, address, cancel).await else {
            return Ok(false);
        };

        let stale = match fetch.address {
            TaskAddress::Wallet(wallet) => self.set_address(Some(wallet)),
            TaskAddress::Anonymous => false,
        };

        match fetch.result {
            Ok(tasks) if !tasks.is_empty() => self.tasks.commit(tasks),
            Ok(_) => {
                tracing::debug!(quest = %self.quest_id, "empty task list, discarding");
                self.tasks.discard("empty task list");
            }
            Err(e) if e.is_malformed() => {
                tracing::debug!(quest = %self.quest_id, error = %e, "discarding task response");
                self.tasks.discard(e.to_string());
            }
            Err(e) => {
                tracing::warn!(quest = %self.quest_id, error = %e, "task fetch failed");
                self.tasks.discard(e.to_string());
                return Err(e.into());
            }
        }
        Ok(stale)
    }

    /// Recompute eligible and unclaimed rewards for the current quest and
    /// address, then rebuild the claim gate.
    ///
    /// Nothing happens until the quest is loaded. A failed pass leaves the
    /// previous reward state in place; it is not retried.
    pub async fn refresh_rewards(&mut self) -> Result<(), PageError> {
        let Some(quest) = self.quest.loaded() else {
            return Ok(());
        };
        let reconciler = EligibilityReconciler::new(&self.api, &self.contracts);
        match reconciler
            .reconcile(self.quest_id, quest, self.address.as_ref())
            .await
        {
            Ok(pass) => {
                self.eligible = pass.eligible;
                self.unclaimed = pass.unclaimed;
                self.gate.rebuild(self.quest_id, &self.unclaimed);
                Ok(())
            }
            Err(e) => {
                if e.is_malformed() {
                    tracing::debug!(quest = %self.quest_id, error = %e, "discarding rewards response");
                } else {
                    tracing::warn!(quest = %self.quest_id, error = %e, "reward reconciliation failed, keeping previous state");
                }
                Err(e.into())
            }
        }
    }

    /// Call a task's verify endpoint for the connected wallet.
    ///
    /// A confirmed task is marked completed and rewards are refreshed. A
    /// failed refresh does not turn a confirmed task into an error.
    pub async fn verify_task(&mut self, task_id: u64) -> Result<VerifyOutcome, PageError> {
        let address = self.address.ok_or(PageError::NoAddress)?;
        let task = self
            .tasks
            .loaded()
            .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
            .ok_or(PageError::UnknownTask(task_id))?;

        let outcome = self.api.verify_task(&task.verify_endpoint, &address).await?;
        match &outcome {
            VerifyOutcome::Verified => {
                tracing::info!(quest = %self.quest_id, task = task_id, "task verified");
                if let Some(tasks) = self.tasks.loaded() {
                    let updated = tasks
                        .iter()
                        .cloned()
                        .map(|mut t| {
                            if t.id == task_id {
                                t.completed = true;
                            }
                            t
                        })
                        .collect();
                    self.tasks.commit(updated);
                }
                // A failed pass is logged by `refresh_rewards` and leaves the
                // previous reward state; the verification still stands.
                let _ = self.refresh_rewards().await;
            }
            VerifyOutcome::Rejected(reason) => {
                tracing::info!(quest = %self.quest_id, task = task_id, reason = %reason, "task not verified");
            }
        }
        Ok(outcome)
    }

    /// Hand the mint multicall to the wallet. The claim action stays disabled
    /// until the next reconciliation pass.
    pub async fn claim(&mut self) -> Result<ClaimOutcome, PageError> {
        Ok(self.gate.claim(&self.wallet).await?)
    }

    pub fn view(&self) -> QuestView {
        QuestView::build(
            &self.quest,
            &self.tasks,
            self.address.as_ref(),
            self.gate.is_enabled(),
        )
    }

    pub fn quest_id(&self) -> QuestId {
        self.quest_id
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn quest(&self) -> &Loadable<QuestDocument> {
        &self.quest
    }

    pub fn tasks(&self) -> &Loadable<Vec<UserTask>> {
        &self.tasks
    }

    pub fn eligible(&self) -> &RewardGroups {
        &self.eligible
    }

    pub fn unclaimed(&self) -> &[EligibleReward] {
        &self.unclaimed
    }

    pub fn mint_calls(&self) -> &[Call] {
        self.gate.calls()
    }

    pub fn claim_enabled(&self) -> bool {
        self.gate.is_enabled()
    }
}
