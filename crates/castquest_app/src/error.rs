//! # App Error Types

use castquest_chain::{ChainError, WalletError};
use thiserror::Error;

/// Errors raised by the dashboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Config file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// File path.
        path: String,
        /// OS error text.
        reason: String,
    },

    /// Contract boundary error.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Wallet refused or failed.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Crafting slot index out of range.
    #[error("ingredient slot {0} does not exist")]
    InvalidSlot(usize),
}

/// Result type for dashboard operations.
pub type AppResult<T> = Result<T, AppError>;
