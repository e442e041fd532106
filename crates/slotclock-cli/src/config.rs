//! CLI configuration management.
//!
//! Optional TOML file holding per-cluster RPC endpoints and estimation
//! defaults. The file is only ever read.

use serde::{Deserialize, Serialize};
use slotclock_rpc::client::MAX_PERFORMANCE_SAMPLES;
use slotclock_rpc::cluster_api_url;
use slotclock_types::Network;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// RPC endpoint for mainnet
    pub mainnet_url: String,
    /// RPC endpoint for testnet
    pub testnet_url: String,
    /// Performance samples used for estimates
    pub sample_limit: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mainnet_url: cluster_api_url(Network::Mainnet).to_string(),
            testnet_url: cluster_api_url(Network::Testnet).to_string(),
            sample_limit: slotclock_core::DEFAULT_SAMPLE_LIMIT,
            timeout_secs: 30,
        }
    }
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: CliConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        Ok(config)
    }

    /// Default configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".slotclock").join("config.toml"))
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sample_limit == 0 || self.sample_limit > MAX_PERFORMANCE_SAMPLES {
            anyhow::bail!(
                "sample_limit must be between 1 and {}, got {}",
                MAX_PERFORMANCE_SAMPLES,
                self.sample_limit
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }
        for url in [&self.mainnet_url, &self.testnet_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("Invalid RPC URL: {}", url);
            }
        }
        Ok(())
    }

    /// Configured endpoint for a network.
    pub fn rpc_url(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_url,
            Network::Testnet => &self.testnet_url,
        }
    }
}
