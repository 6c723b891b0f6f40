//! Client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use quest_types::Address;
use quest_utils::LogFormat;

use crate::error::PageError;

/// Configuration for a quest page client.
///
/// Can be loaded from a TOML file via [`ClientConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the quest backend (`/api/get_quest`, `/api/get_tasks`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Starknet JSON-RPC endpoint used for contract reads.
    #[serde(default = "default_starknet_rpc_url")]
    pub starknet_rpc_url: String,

    /// Starknet ID identity contract. Verification status is unavailable
    /// without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_contract: Option<Address>,

    /// Contract whose verifier data is read from the identity contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifier_contract: Option<Address>,

    /// Base link of the Starknet ID app.
    #[serde(default = "default_app_link")]
    pub app_link: String,

    /// How long the task fetch waits for a wallet address.
    #[serde(default = "default_address_wait_ms")]
    pub address_wait_ms: u64,

    /// Per-request timeout for backend calls. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// File backing the session store.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    "https://api.starknet.quest".to_string()
}

fn default_starknet_rpc_url() -> String {
    "https://starknet-mainnet.public.blastapi.io/rpc/v0_7".to_string()
}

fn default_app_link() -> String {
    "https://app.starknet.id".to_string()
}

fn default_address_wait_ms() -> u64 {
    1000
}

fn default_session_file() -> PathBuf {
    PathBuf::from("./quest_session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, PageError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PageError::Config(format!("{path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PageError> {
        toml::from_str(s).map_err(|e| PageError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, PageError> {
        toml::to_string_pretty(self).map_err(|e| PageError::Config(e.to_string()))
    }

    pub fn address_wait(&self) -> Duration {
        Duration::from_millis(self.address_wait_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            starknet_rpc_url: default_starknet_rpc_url(),
            identity_contract: None,
            verifier_contract: None,
            app_link: default_app_link(),
            address_wait_ms: default_address_wait_ms(),
            request_timeout_secs: None,
            session_file: default_session_file(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
