//! Slotclock RPC - Client for the ledger's JSON-RPC service.
//!
//! Provides the [`LedgerRpc`] seam the estimator is written against, an
//! HTTP implementation of it, and the standard cluster URL lookup.

pub mod client;
pub mod cluster;
pub mod error;
pub mod ledger;

pub use client::RpcClient;
pub use cluster::cluster_api_url;
pub use error::{Result, RpcError};
pub use ledger::LedgerRpc;
