use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarknetError {
    #[error("RPC request failed: {0}")]
    RequestFailed(String),

    #[error("RPC node unreachable: {0}")]
    Unreachable(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] quest_types::TypesError),

    #[error("wallet execution failed: {0}")]
    Wallet(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
