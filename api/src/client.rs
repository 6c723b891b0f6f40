//! HTTP client for the quest backend.

use crate::error::ApiError;
use quest_types::{Address, EligibleReward, QuestDocument, QuestId, TaskAddress, UserTask};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Default connection timeout. Requests themselves have no deadline unless
/// one is configured with [`HttpQuestApi::with_timeout`].
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of calling a task's verify endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The backend confirmed the task.
    Verified,
    /// The backend refused; carries its message.
    Rejected(String),
}

/// The backend operations the quest page depends on.
#[allow(async_fn_in_trait)]
pub trait QuestApi {
    /// `GET /api/get_quest?id={quest_id}`
    async fn get_quest(&self, quest_id: QuestId) -> Result<QuestDocument, ApiError>;

    /// `GET /api/get_tasks?quest_id={quest_id}&addr={address}`
    async fn get_tasks(
        &self,
        quest_id: QuestId,
        address: &TaskAddress,
    ) -> Result<Vec<UserTask>, ApiError>;

    /// `GET {endpoint}?addr={address}`
    async fn get_eligible_rewards(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<Vec<EligibleReward>, ApiError>;

    /// `GET {endpoint}?address={address}`
    async fn verify_task(&self, endpoint: &str, address: &Address)
        -> Result<VerifyOutcome, ApiError>;
}

impl<T: QuestApi + ?Sized> QuestApi for &T {
    async fn get_quest(&self, quest_id: QuestId) -> Result<QuestDocument, ApiError> {
        (**self).get_quest(quest_id).await
    }

    async fn get_tasks(
        &self,
        quest_id: QuestId,
        address: &TaskAddress,
    ) -> Result<Vec<UserTask>, ApiError> {
        (**self).get_tasks(quest_id, address).await
    }

    async fn get_eligible_rewards(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<Vec<EligibleReward>, ApiError> {
        (**self).get_eligible_rewards(endpoint, address).await
    }

    async fn verify_task(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<VerifyOutcome, ApiError> {
        (**self).verify_task(endpoint, address).await
    }
}

/// Raw body of a rewards endpoint: `{"rewards": [...]}`.
#[derive(Debug, Deserialize)]
struct RewardsResponse {
    #[serde(default)]
    rewards: Option<Vec<EligibleReward>>,
}

/// Raw body of a verify endpoint: `{"res": true}` or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    res: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the quest backend REST API.
#[derive(Clone)]
pub struct HttpQuestApi {
    /// HTTP client (reusable connection pool).
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuestApi {
    /// Create a client for the backend at `base_url` (e.g. `https://starknet.quest`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint taken from a quest or task document.
    ///
    /// Relative endpoints (`/api/...`) live on the backend itself.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.contains("://") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }

    /// GET `url` with `query` and return the parsed JSON body.
    async fn get_value(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(url, ?query, "quest backend request");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("body is not JSON: {e}")))
    }

    /// GET a document, treating the backend's `{error}` shape as a failure.
    async fn get_document<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let value = self.get_value(url, query).await?;
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return Err(ApiError::Query(message.to_string()));
        }
        serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

impl QuestApi for HttpQuestApi {
    async fn get_quest(&self, quest_id: QuestId) -> Result<QuestDocument, ApiError> {
        let url = format!("{}/api/get_quest", self.base_url);
        let quest: QuestDocument = self
            .get_document(&url, &[("id", quest_id.to_string())])
            .await?;
        if !quest.is_well_formed() {
            return Err(ApiError::InvalidResponse(
                "quest document has no name".to_string(),
            ));
        }
        Ok(quest)
    }

    async fn get_tasks(
        &self,
        quest_id: QuestId,
        address: &TaskAddress,
    ) -> Result<Vec<UserTask>, ApiError> {
        let url = format!("{}/api/get_tasks", self.base_url);
        self.get_document(
            &url,
            &[
                ("quest_id", quest_id.to_string()),
                ("addr", address.query_value()),
            ],
        )
        .await
    }

    async fn get_eligible_rewards(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<Vec<EligibleReward>, ApiError> {
        let url = self.endpoint_url(endpoint);
        let response: RewardsResponse = self
            .get_document(&url, &[("addr", address.to_decimal())])
            .await?;
        response
            .rewards
            .ok_or_else(|| ApiError::InvalidResponse("missing `rewards` field".to_string()))
    }

    async fn verify_task(
        &self,
        endpoint: &str,
        address: &Address,
    ) -> Result<VerifyOutcome, ApiError> {
        let url = self.endpoint_url(endpoint);
        let value = self
            .get_value(&url, &[("address", address.to_string())])
            .await?;
        let response: VerifyResponse =
            serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        match (response.res, response.error) {
            (true, _) => Ok(VerifyOutcome::Verified),
            (false, Some(message)) => Ok(VerifyOutcome::Rejected(message)),
            (false, None) => Ok(VerifyOutcome::Rejected(
                "task could not be verified".to_string(),
            )),
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::Unreachable(format!("connection failed: {e}"))
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}
