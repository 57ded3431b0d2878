//! # CastQuest Chain Boundary
//!
//! Everything the dashboard needs to talk to the CastQuest contracts,
//! without owning transport or signing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐  ChainId   ┌─────────────────┐
//! │  WalletSession  │ ─────────▶ │  AddressBook    │ ──▶ Address
//! │  (connect/disc) │            │  (total lookup) │
//! └────────┬────────┘            └─────────────────┘
//!          │ SessionHandle
//!          ▼
//! ┌─────────────────┐  CallRequest ┌─────────────────┐
//! │  ChainReader    │ ───────────▶ │  ChainClient    │  (external)
//! │  (sol! codecs)  │              │  RPC / signer   │
//! └─────────────────┘              └─────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Address resolution never fails; unknown chains fall back to Base Sepolia
//! - The all-zero address means "not deployed"
//! - Registry descriptors and `sol!` bindings agree on every selector

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod address_book;
pub mod calls;
pub mod contracts;
pub mod error;
pub mod network;
pub mod registry;
pub mod session;

pub use address_book::{AddressBook, AddressBookConfig, AddressTable};
pub use calls::{CallRequest, ChainClient, ChainReader, ChainWriter};
pub use contracts::{
    ContractName, EquippedGear, GearSlot, GearStats, PlayerData, PlayerStats, Rarity,
    RecipeDescriptor,
};
pub use error::{ChainError, ChainResult, WalletError};
pub use network::{ChainId, Network, NetworkTier, SUPPORTED_NETWORKS};
pub use registry::{AbiType, ContractInterface, OperationDescriptor, Param, StateMutability};
pub use session::{
    SessionHandle, SessionState, WalletAccount, WalletConnector, WalletEvent, WalletSession,
};
