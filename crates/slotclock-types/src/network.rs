//! Preset networks.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A supported network.
///
/// Only the two preset clusters are accepted; anything else is rejected
/// by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Cluster identifier used by the standard cluster URL lookup.
    pub fn cluster(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet-beta",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(ValidationError::InvalidNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn test_parse_rejects_other_clusters() {
        for bad in ["devnet", "Mainnet", "mainnet-beta", " testnet", ""] {
            let err = bad.parse::<Network>().unwrap_err();
            assert_eq!(err, ValidationError::InvalidNetwork(bad.to_string()));
        }
    }

    #[test]
    fn test_cluster_names() {
        assert_eq!(Network::Mainnet.cluster(), "mainnet-beta");
        assert_eq!(Network::Testnet.cluster(), "testnet");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Network::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
    }
}
