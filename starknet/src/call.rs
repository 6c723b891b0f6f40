//! Multicall descriptors.

use quest_types::{Address, Felt};
use serde::{Deserialize, Serialize};

/// One invocation in a multicall, in the shape wallets accept
/// (`contractAddress`, `entrypoint`, `calldata`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub contract_address: Address,
    pub entrypoint: String,
    pub calldata: Vec<Felt>,
}

impl Call {
    pub fn new(contract_address: Address, entrypoint: impl Into<String>, calldata: Vec<Felt>) -> Self {
        Self {
            contract_address,
            entrypoint: entrypoint.into(),
            calldata,
        }
    }
}
