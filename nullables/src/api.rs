//! Nullable quest backend: canned responses, recorded requests.

use quest_api::{ApiError, QuestApi, VerifyOutcome};
use quest_types::{Address, EligibleReward, QuestDocument, QuestId, TaskAddress, UserTask};
use std::cell::RefCell;

/// A canned backend response.
#[derive(Clone, Debug)]
pub enum Canned<T> {
    Ok(T),
    /// The backend answered with the wrong shape.
    Malformed,
    /// The request never completed.
    Unreachable,
}

impl<T: Clone> Canned<T> {
    fn get(&self) -> Result<T, ApiError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Malformed => Err(ApiError::InvalidResponse("canned malformed response".into())),
            Self::Unreachable => Err(ApiError::Unreachable("canned network failure".into())),
        }
    }
}

/// A request received by [`NullQuestApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    GetQuest(QuestId),
    GetTasks { quest_id: QuestId, addr: String },
    EligibleRewards { endpoint: String, addr: Address },
    VerifyTask { endpoint: String, address: Address },
}

/// A test backend that serves canned responses and records requests.
pub struct NullQuestApi {
    quest: RefCell<Canned<QuestDocument>>,
    tasks: RefCell<Canned<Vec<UserTask>>>,
    rewards: RefCell<Canned<Vec<EligibleReward>>>,
    verify: RefCell<Canned<VerifyOutcome>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl NullQuestApi {
    /// A backend where every endpoint is malformed until configured.
    pub fn new() -> Self {
        Self {
            quest: RefCell::new(Canned::Malformed),
            tasks: RefCell::new(Canned::Ok(Vec::new())),
            rewards: RefCell::new(Canned::Ok(Vec::new())),
            verify: RefCell::new(Canned::Ok(VerifyOutcome::Verified)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_quest(self, quest: QuestDocument) -> Self {
        self.set_quest(Canned::Ok(quest));
        self
    }

    pub fn with_tasks(self, tasks: Vec<UserTask>) -> Self {
        self.set_tasks(Canned::Ok(tasks));
        self
    }

    pub fn with_rewards(self, rewards: Vec<EligibleReward>) -> Self {
        self.set_rewards(Canned::Ok(rewards));
        self
    }

    pub fn set_quest(&self, quest: Canned<QuestDocument>) {
        *self.quest.borrow_mut() = quest;
    }

    pub fn set_tasks(&self, tasks: Canned<Vec<UserTask>>) {
        *self.tasks.borrow_mut() = tasks;
    }

    pub fn set_rewards(&self, rewards: Canned<Vec<EligibleReward>>) {
        *self.rewards.borrow_mut() = rewards;
    }

    pub fn set_verify(&self, outcome: Canned<VerifyOutcome>) {
        *self.verify.borrow_mut() = outcome;
    }

    /// All requests received so far (for assertions).
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `addr` values of every task request, in order.
    pub fn task_requests(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|r| match r {
                ApiRequest::GetTasks { addr, .. } => Some(addr.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of rewards endpoint requests received.
    pub fn reward_request_count(&self) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| matches!(r, ApiRequest::EligibleRewards { .. }))
            .count()
    }

    pub fn reset(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, request: ApiRequest) {
        self.requests.borrow_mut().push(request);
    }
}

impl Default for NullQuestApi {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestApi for NullQuestApi {
    async fn get_quest(&self, quest_id: QuestId) -> Result<QuestDocument, ApiError> {
        self.record(ApiRequest::GetQuest(quest_id));
        self.quest.borrow().get()
    }

    async fn get_tasks(
        &self,
        quest_id: QuestId,
        address: &TaskAddress,
    ) -> Result<Vec<UserTask>, ApiError> {
        self.record(ApiRequest::GetTasks {
            quest_id,
            addr: address.query_value(),
        });
        self.tasks.borrow().get()
    }

    async fn get_eligible_rewards(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<Vec<EligibleReward>, ApiError> {
        self.record(ApiRequest::EligibleRewards {
            endpoint: endpoint.to_string(),
            addr: *address,
        });
        self.rewards.borrow().get()
    }

    async fn verify_task(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<VerifyOutcome, ApiError> {
        self.record(ApiRequest::VerifyTask {
            endpoint: endpoint.to_string(),
            address: *address,
        });
        self.verify.borrow().get()
    }
}
