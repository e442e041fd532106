//! Error types for the RPC client.

use thiserror::Error;

/// RPC result type.
pub type Result<T> = std::result::Result<T, RpcError>;

/// RPC client errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RpcError {
    /// Connection or I/O failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request exceeded the client timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Non-success HTTP status without a JSON-RPC body
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Error object returned by the server
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response carried neither a result nor an error
    #[error("Empty result for {0}")]
    EmptyResult(String),

    /// Rejected locally before sending
    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RpcError::Timeout(e.to_string())
        } else {
            RpcError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(e: serde_json::Error) -> Self {
        RpcError::Serialization(e.to_string())
    }
}
