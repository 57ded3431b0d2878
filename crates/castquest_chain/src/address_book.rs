//! # Address Book
//!
//! Per-network contract addresses and the resolver over them.
//!
//! Resolution is a pure, total lookup: Base Mainnet (8453) reads the
//! production table, everything else reads the Base Sepolia table. A zero
//! address is a valid answer and means "not deployed yet".
//!
//! ## Configuration
//!
//! ```toml
//! [base]
//! QuestGear = "0x..."
//! QuestMaterials = "0x..."
//! GameManager = "0x..."
//!
//! [base_sepolia]
//! QuestGear = "0x..."
//! ```
//!
//! Missing entries stay at the zero placeholder.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::contracts::ContractName;
use crate::error::{ChainError, ChainResult};
use crate::network::{ChainId, NetworkTier};

/// Addresses of the three contracts on one network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddressTable {
    /// `QuestGear` address.
    pub quest_gear: Address,
    /// `QuestMaterials` address.
    pub quest_materials: Address,
    /// `GameManager` address.
    pub game_manager: Address,
}

impl AddressTable {
    /// Table with every contract undeployed.
    pub const UNDEPLOYED: Self = Self {
        quest_gear: Address::ZERO,
        quest_materials: Address::ZERO,
        game_manager: Address::ZERO,
    };

    /// Address configured for `contract`.
    #[inline]
    #[must_use]
    pub const fn get(&self, contract: ContractName) -> Address {
        match contract {
            ContractName::QuestGear => self.quest_gear,
            ContractName::QuestMaterials => self.quest_materials,
            ContractName::GameManager => self.game_manager,
        }
    }

    /// Returns a copy with `contract` set to `address`.
    #[must_use]
    pub const fn with(mut self, contract: ContractName, address: Address) -> Self {
        match contract {
            ContractName::QuestGear => self.quest_gear = address,
            ContractName::QuestMaterials => self.quest_materials = address,
            ContractName::GameManager => self.game_manager = address,
        }
        self
    }

    /// Whether `contract` has a non-zero address here.
    #[inline]
    #[must_use]
    pub fn is_deployed(&self, contract: ContractName) -> bool {
        self.get(contract) != Address::ZERO
    }
}

/// Address tables for both tiers. Built once, never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddressBook {
    production: AddressTable,
    test: AddressTable,
}

impl AddressBook {
    /// The shipped configuration: nothing deployed on either tier.
    pub const PLACEHOLDER: Self = Self::new(AddressTable::UNDEPLOYED, AddressTable::UNDEPLOYED);

    /// Creates an address book from the Base Mainnet and Base Sepolia tables.
    #[must_use]
    pub const fn new(production: AddressTable, test: AddressTable) -> Self {
        Self { production, test }
    }

    /// Parses an address book from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidConfig`] on malformed TOML and
    /// [`ChainError::InvalidAddress`] on a bad address string.
    pub fn from_toml_str(text: &str) -> ChainResult<Self> {
        let config: AddressBookConfig =
            toml::from_str(text).map_err(|e| ChainError::InvalidConfig(e.to_string()))?;
        config.build()
    }

    /// Table for a tier.
    #[inline]
    #[must_use]
    pub const fn table(&self, tier: NetworkTier) -> &AddressTable {
        match tier {
            NetworkTier::Production => &self.production,
            NetworkTier::Test => &self.test,
        }
    }

    /// Resolves the address of `contract` on `chain_id`.
    ///
    /// Never fails. Unrecognised chains resolve exactly like Base Sepolia.
    #[must_use]
    pub fn resolve(&self, chain_id: ChainId, contract: ContractName) -> Address {
        if !chain_id.has_address_table() {
            debug!(%chain_id, %contract, "unrecognised chain, using Base Sepolia addresses");
        }
        self.table(chain_id.tier()).get(contract)
    }

    /// Resolves like [`Self::resolve`] but refuses the zero placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotDeployed`] when the address is zero.
    pub fn resolve_deployed(
        &self,
        chain_id: ChainId,
        contract: ContractName,
    ) -> ChainResult<Address> {
        if !self.table(chain_id.tier()).is_deployed(contract) {
            warn!(%chain_id, %contract, "contract not deployed, feature unavailable");
            return Err(ChainError::NotDeployed {
                contract,
                chain_id: chain_id.get(),
            });
        }
        Ok(self.resolve(chain_id, contract))
    }
}

/// Raw address table as written in config files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressTableConfig {
    /// `QuestGear` address string.
    #[serde(rename = "QuestGear", default, skip_serializing_if = "Option::is_none")]
    pub quest_gear: Option<String>,
    /// `QuestMaterials` address string.
    #[serde(rename = "QuestMaterials", default, skip_serializing_if = "Option::is_none")]
    pub quest_materials: Option<String>,
    /// `GameManager` address string.
    #[serde(rename = "GameManager", default, skip_serializing_if = "Option::is_none")]
    pub game_manager: Option<String>,
}

impl AddressTableConfig {
    fn build(&self) -> ChainResult<AddressTable> {
        let mut table = AddressTable::UNDEPLOYED;
        for (contract, raw) in [
            (ContractName::QuestGear, &self.quest_gear),
            (ContractName::QuestMaterials, &self.quest_materials),
            (ContractName::GameManager, &self.game_manager),
        ] {
            if let Some(raw) = raw {
                table = table.with(contract, parse_address(contract, raw)?);
            }
        }
        Ok(table)
    }
}

/// Raw address book as written in config files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressBookConfig {
    /// Base Mainnet table.
    #[serde(default)]
    pub base: AddressTableConfig,
    /// Base Sepolia table (also the fallback).
    #[serde(default)]
    pub base_sepolia: AddressTableConfig,
}

impl AddressBookConfig {
    /// Validates every address and builds the immutable book.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidAddress`] on the first bad address.
    pub fn build(&self) -> ChainResult<AddressBook> {
        Ok(AddressBook::new(self.base.build()?, self.base_sepolia.build()?))
    }
}

fn parse_address(contract: ContractName, raw: &str) -> ChainResult<Address> {
    let trimmed = raw.trim();
    if trimmed.len() != 42 || !trimmed.starts_with("0x") {
        return Err(ChainError::InvalidAddress {
            contract,
            value: raw.to_string(),
        });
    }
    Address::from_str(trimmed).map_err(|_| ChainError::InvalidAddress {
        contract,
        value: raw.to_string(),
    })
}
