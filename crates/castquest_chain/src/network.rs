//! # Networks
//!
//! Chain identifiers and the networks the wallet is allowed to connect to.
//!
//! **CRITICAL:** 8453 and 84532 are the only chain ids with their own
//! contract address tables. Every other id uses the Base Sepolia table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// EIP-155 chain identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Base Mainnet.
    pub const BASE: Self = Self(8453);
    /// Base Sepolia testnet.
    pub const BASE_SEPOLIA: Self = Self(84532);
    /// Optimism Mainnet.
    pub const OPTIMISM: Self = Self(10);
    /// Optimism Sepolia testnet.
    pub const OPTIMISM_SEPOLIA: Self = Self(11_155_420);

    /// Returns the raw numeric id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the address tier this chain resolves to.
    ///
    /// Unrecognised chains land on [`NetworkTier::Test`].
    #[inline]
    #[must_use]
    pub const fn tier(self) -> NetworkTier {
        match self.0 {
            8453 => NetworkTier::Production,
            _ => NetworkTier::Test,
        }
    }

    /// True for the two chain ids that own an address table.
    #[inline]
    #[must_use]
    pub const fn has_address_table(self) -> bool {
        matches!(self.0, 8453 | 84532)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which address table a chain reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkTier {
    /// Base Mainnet deployments.
    Production,
    /// Base Sepolia deployments, also the fallback.
    Test,
}

/// A network the wallet may connect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
    /// Chain id.
    pub chain_id: ChainId,
    /// Display name.
    pub name: &'static str,
    /// Public RPC endpoint.
    pub rpc_url: &'static str,
    /// Whether this is a testnet.
    pub is_testnet: bool,
}

/// Every network the dashboard offers in the wallet modal.
pub const SUPPORTED_NETWORKS: &[Network] = &[
    Network {
        chain_id: ChainId::BASE,
        name: "Base",
        rpc_url: "https://mainnet.base.org",
        is_testnet: false,
    },
    Network {
        chain_id: ChainId::OPTIMISM,
        name: "OP Mainnet",
        rpc_url: "https://mainnet.optimism.io",
        is_testnet: false,
    },
    Network {
        chain_id: ChainId::BASE_SEPOLIA,
        name: "Base Sepolia",
        rpc_url: "https://sepolia.base.org",
        is_testnet: true,
    },
    Network {
        chain_id: ChainId::OPTIMISM_SEPOLIA,
        name: "OP Sepolia",
        rpc_url: "https://sepolia.optimism.io",
        is_testnet: true,
    },
];

/// Looks up a supported network by chain id.
#[must_use]
pub fn network(chain_id: ChainId) -> Option<&'static Network> {
    SUPPORTED_NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_tiers() {
        assert_eq!(ChainId::BASE.tier(), NetworkTier::Production);
        assert_eq!(ChainId::BASE_SEPOLIA.tier(), NetworkTier::Test);
        assert!(ChainId::BASE.has_address_table());
        assert!(ChainId::BASE_SEPOLIA.has_address_table());
    }

    #[test]
    fn test_unknown_chain_is_test_tier() {
        for id in [0, 1, 10, 11_155_420, 999_999, u64::MAX] {
            let chain = ChainId(id);
            assert_eq!(chain.tier(), NetworkTier::Test);
            assert!(!chain.has_address_table());
        }
    }

    #[test]
    fn test_supported_network_lookup() {
        assert_eq!(network(ChainId::OPTIMISM).map(|n| n.name), Some("OP Mainnet"));
        assert!(network(ChainId::BASE_SEPOLIA).is_some_and(|n| n.is_testnet));
        assert!(network(ChainId(1)).is_none());
    }
}
