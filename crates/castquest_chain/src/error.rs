//! # Chain Error Types
//!
//! Errors raised at the contract boundary and by the wallet capability.

use thiserror::Error;

use crate::contracts::ContractName;

/// Errors that can occur at the contract boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The contract resolved to the zero address on this chain.
    ///
    /// Callers treat this as "feature unavailable", not as a defect.
    #[error("{contract} is not deployed on chain {chain_id}")]
    NotDeployed {
        /// The contract that was requested.
        contract: ContractName,
        /// The chain the lookup was made for.
        chain_id: u64,
    },

    /// Contract name not recognised.
    #[error("unknown contract: {0}")]
    UnknownContract(String),

    /// Selector does not belong to the contract's interface.
    #[error("operation 0x{selector} is not part of {contract}")]
    UnknownOperation {
        /// The contract the call was aimed at.
        contract: ContractName,
        /// Hex-encoded 4-byte selector.
        selector: String,
    },

    /// A configured address is not 20 bytes of hex.
    #[error("invalid address for {contract}: {value:?}")]
    InvalidAddress {
        /// Contract the address was configured for.
        contract: ContractName,
        /// The offending value.
        value: String,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Return data did not match the declared outputs.
    #[error("failed to decode return data: {0}")]
    Decode(String),

    /// The external chain client reported a failure.
    #[error("chain client error: {0}")]
    Client(String),
}

/// Result type for chain boundary operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Failures reported by the external wallet capability.
///
/// These are surfaced as-is; the session never reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user rejected the connection request.
    #[error("connection rejected by user")]
    Rejected,

    /// No wallet is installed or reachable.
    #[error("no wallet available")]
    NoWallet,

    /// The wallet is on a chain the app does not support.
    #[error("wallet is on unsupported chain {chain_id}")]
    NetworkMismatch {
        /// Chain id reported by the wallet.
        chain_id: u64,
    },

    /// Any other provider-side failure.
    #[error("wallet provider error: {0}")]
    Provider(String),
}
