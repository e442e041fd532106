//! HTTP client for the ledger's JSON-RPC service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use slotclock_types::{PerformanceSample, Slot, UnixTimestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

use crate::error::{Result, RpcError};
use crate::ledger::LedgerRpc;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest window `getRecentPerformanceSamples` will serve.
pub const MAX_PERFORMANCE_SAMPLES: usize = 720;

/// Server error codes meaning "this slot has no block time".
///
/// -32004 block not available, -32007 slot skipped,
/// -32009 slot missing in long-term storage.
const BLOCK_TIME_UNAVAILABLE_CODES: [i64; 3] = [-32004, -32007, -32009];

/// RPC request.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

/// RPC response.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// RPC error object.
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Ledger RPC client.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client with the default timeout.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("slotclock/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Make an RPC call.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        debug!(method, id, url = %self.url, "sending rpc request");

        let response = self.http
            .post(&self.url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(method, id, %status, body = %body, "rpc response");

        match decode_response(method, &body) {
            Err(RpcError::Serialization(_)) if !status.is_success() => Err(RpcError::Http {
                status: status.as_u16(),
                body: truncate(&body, 200),
            }),
            other => other,
        }
    }
}

#[async_trait]
impl LedgerRpc for RpcClient {
    async fn get_slot(&self) -> Result<Slot> {
        self.request("getSlot", json!([])).await
    }

    async fn get_block_time(&self, slot: Slot) -> Result<Option<UnixTimestamp>> {
        match self.request::<Option<UnixTimestamp>>("getBlockTime", json!([slot])).await {
            Err(RpcError::Rpc { code, message }) if BLOCK_TIME_UNAVAILABLE_CODES.contains(&code) => {
                debug!(slot, code, %message, "block time unavailable");
                Ok(None)
            }
            other => other,
        }
    }

    async fn get_recent_performance_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>> {
        if limit > MAX_PERFORMANCE_SAMPLES {
            return Err(RpcError::InvalidParams(format!(
                "performance sample limit {} exceeds {}",
                limit, MAX_PERFORMANCE_SAMPLES
            )));
        }
        self.request("getRecentPerformanceSamples", json!([limit])).await
    }
}

/// Decode a JSON-RPC response body.
///
/// A `null` result is handed to `T` as-is, so `Option<_>` results decode to
/// `None` while required results fail with [`RpcError::EmptyResult`].
fn decode_response<T: serde::de::DeserializeOwned>(method: &str, body: &str) -> Result<T> {
    let response: RpcResponse = serde_json::from_str(body)
        .map_err(|e| RpcError::Serialization(format!("Failed to parse response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(RpcError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let was_null = response.result.is_null();
    serde_json::from_value(response.result).map_err(|e| {
        if was_null {
            RpcError::EmptyResult(method.to_string())
        } else {
            RpcError::Serialization(format!("Unexpected {} result: {}", method, e))
        }
    })
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
