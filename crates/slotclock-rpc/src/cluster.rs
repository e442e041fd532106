//! Standard cluster URL lookup.

use slotclock_types::Network;

/// Public endpoint of the `mainnet-beta` cluster.
pub const MAINNET_BETA_URL: &str = "https://api.mainnet-beta.solana.com";

/// Public endpoint of the `testnet` cluster.
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";

/// Resolve a network to its cluster's public RPC endpoint.
pub fn cluster_api_url(network: Network) -> &'static str {
    match network.cluster() {
        "mainnet-beta" => MAINNET_BETA_URL,
        _ => TESTNET_URL,
    }
}
