//! Read-only contract calls over Starknet JSON-RPC.

use crate::error::StarknetError;
use crate::selector::get_selector_from_name;
use quest_types::{Address, Felt};

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes view calls against deployed contracts.
#[allow(async_fn_in_trait)]
pub trait ContractReader {
    async fn call(
        &self,
        contract: &Address,
        entrypoint: &str,
        calldata: &[Felt],
    ) -> Result<Vec<Felt>, StarknetError>;
}

impl<T: ContractReader + ?Sized> ContractReader for &T {
    async fn call(
        &self,
        contract: &Address,
        entrypoint: &str,
        calldata: &[Felt],
    ) -> Result<Vec<Felt>, StarknetError> {
        (**self).call(contract, entrypoint, calldata).await
    }
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Vec<Felt>>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// JSON-RPC client for a Starknet node.
///
/// Only `starknet_call` at the `latest` block is used: the quest page reads
/// contract state, it never writes.
pub struct StarknetRpcClient {
    http: reqwest::Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl StarknetRpcClient {
    /// Create a client targeting `rpc_url` (e.g. `https://starknet-mainnet.public.blastapi.io`).
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, StarknetError> {
        let http = reqwest::Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| StarknetError::Client(e.to_string()))?;
        Ok(Self {
            http,
            rpc_url: rpc_url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Send a JSON-RPC request and return the decoded response envelope.
    async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<RpcResponse, StarknetError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    StarknetError::Unreachable(e.to_string())
                } else {
                    StarknetError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(StarknetError::RequestFailed(format!(
                "node returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| StarknetError::InvalidResponse(format!("invalid JSON response: {e}")))
    }
}

impl ContractReader for StarknetRpcClient {
    async fn call(
        &self,
        contract: &Address,
        entrypoint: &str,
        calldata: &[Felt],
    ) -> Result<Vec<Felt>, StarknetError> {
        let selector = get_selector_from_name(entrypoint);
        tracing::debug!(%contract, entrypoint, args = calldata.len(), "starknet_call");

        let params = serde_json::json!({
            "request": {
                "contract_address": contract.to_string(),
                "entry_point_selector": selector.to_hex(),
                "calldata": calldata.iter().map(Felt::to_hex).collect::<Vec<_>>(),
            },
            "block_id": "latest",
        });

        let response = self.rpc_call("starknet_call", params).await?;
        if let Some(err) = response.error {
            return Err(StarknetError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response
            .result
            .ok_or_else(|| StarknetError::InvalidResponse("missing `result`".to_string()))
    }
}
