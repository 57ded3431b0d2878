//! # Chain Calls
//!
//! Typed requests against the CastQuest contracts.
//!
//! This module owns encoding and decoding only. Getting bytes to a node and
//! back, and signing writes, is the job of an external [`ChainClient`]
//! (RPC client, injected wallet, test double).
//!
//! Every request is checked against the registry before it leaves: a call
//! whose selector is not part of the target contract's interface is refused,
//! and so is a call aimed at an undeployed (zero) address.

use std::future::Future;

use alloy_primitives::{hex, Address, B256, U256};
use alloy_sol_types::SolCall;
use tracing::debug;

use crate::address_book::AddressBook;
use crate::contracts::{
    ContractName, EquippedGear, GearSlot, GearStats, IGameManager, IQuestGear, IQuestMaterials,
    PlayerData, PlayerStats, RecipeDescriptor,
};
use crate::error::{ChainError, ChainResult};
use crate::network::ChainId;
use crate::registry;

/// An encoded call ready for the external client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    /// Target contract.
    pub contract: ContractName,
    /// Resolved contract address.
    pub to: Address,
    /// Function name from the registry.
    pub operation: &'static str,
    /// Selector followed by ABI-encoded arguments.
    pub data: Vec<u8>,
    /// Whether this is a `view` call.
    pub read_only: bool,
}

impl CallRequest {
    /// Encodes `call` for `contract` at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownOperation`] if the call's selector is not
    /// in the contract's registry entry.
    pub fn new<C: SolCall>(contract: ContractName, to: Address, call: &C) -> ChainResult<Self> {
        let op = registry::interface(contract)
            .operation_by_selector(C::SELECTOR)
            .ok_or_else(|| ChainError::UnknownOperation {
                contract,
                selector: hex::encode(C::SELECTOR),
            })?;

        Ok(Self {
            contract,
            to,
            operation: op.name,
            data: call.abi_encode(),
            read_only: op.is_read_only(),
        })
    }

    /// The 4-byte selector at the front of the calldata.
    #[must_use]
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).map(|s| [s[0], s[1], s[2], s[3]])
    }
}

/// External chain-interaction capability.
///
/// Implemented outside this crate by whatever talks to the node or wallet.
pub trait ChainClient {
    /// Executes a read-only call and returns the raw return data.
    fn call(
        &self,
        chain_id: ChainId,
        request: &CallRequest,
    ) -> impl Future<Output = ChainResult<Vec<u8>>> + Send;

    /// Submits a state-changing call for signing and returns the tx hash.
    fn send(
        &self,
        chain_id: ChainId,
        request: &CallRequest,
    ) -> impl Future<Output = ChainResult<B256>> + Send;
}

/// Typed reads for one chain.
pub struct ChainReader<'a, C> {
    client: &'a C,
    book: &'a AddressBook,
    chain_id: ChainId,
}

impl<'a, C: ChainClient> ChainReader<'a, C> {
    /// Creates a reader bound to `chain_id`.
    #[must_use]
    pub const fn new(client: &'a C, book: &'a AddressBook, chain_id: ChainId) -> Self {
        Self {
            client,
            book,
            chain_id,
        }
    }

    async fn read<Call: SolCall>(
        &self,
        contract: ContractName,
        call: Call,
    ) -> ChainResult<Call::Return> {
        let to = self.book.resolve_deployed(self.chain_id, contract)?;
        let request = CallRequest::new(contract, to, &call)?;
        debug!(chain_id = %self.chain_id, %contract, op = request.operation, "chain read");
        let output = self.client.call(self.chain_id, &request).await?;
        Call::abi_decode_returns(&output, true).map_err(|e| ChainError::Decode(e.to_string()))
    }

    /// Token ids equipped by `player`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn equipped_gear(&self, player: Address) -> ChainResult<EquippedGear> {
        self.read(ContractName::QuestGear, IQuestGear::getEquippedGearCall { player })
            .await
            .map(Into::into)
    }

    /// Aggregate attack/defense of `player`'s equipped set.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn player_stats(&self, player: Address) -> ChainResult<PlayerStats> {
        self.read(ContractName::QuestGear, IQuestGear::getPlayerStatsCall { player })
            .await
            .map(Into::into)
    }

    /// Stats of one gear token.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn gear_stats(&self, token_id: U256) -> ChainResult<GearStats> {
        self.read(ContractName::QuestGear, IQuestGear::gearStatsCall { _0: token_id })
            .await
            .map(Into::into)
    }

    /// A crafting recipe.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn recipe(&self, recipe_id: U256) -> ChainResult<RecipeDescriptor> {
        self.read(
            ContractName::QuestMaterials,
            IQuestMaterials::getRecipeCall { recipeId: recipe_id },
        )
        .await
        .map(Into::into)
    }

    /// Balance of material `id` held by `account`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn material_balance(&self, account: Address, id: U256) -> ChainResult<U256> {
        self.read(
            ContractName::QuestMaterials,
            IQuestMaterials::balanceOfCall { account, id },
        )
        .await
        .map(|r| r._0)
    }

    /// Display name of material `id`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn material_name(&self, id: U256) -> ChainResult<String> {
        self.read(
            ContractName::QuestMaterials,
            IQuestMaterials::materialNamesCall { _0: id },
        )
        .await
        .map(|r| r._0)
    }

    /// Progression snapshot for `player`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn player_data(&self, player: Address) -> ChainResult<PlayerData> {
        self.read(ContractName::GameManager, IGameManager::getPlayerDataCall { player })
            .await
            .map(Into::into)
    }

    /// Whether `player` may complete a quest now.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn can_complete_quest(&self, player: Address) -> ChainResult<bool> {
        self.read(
            ContractName::GameManager,
            IGameManager::canCompleteQuestCall { player },
        )
        .await
        .map(|r| r._0)
    }

    /// Address registered for Farcaster id `fid`, `None` if unregistered.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`], client errors, or decode errors.
    pub async fn player_by_fid(&self, fid: U256) -> ChainResult<Option<Address>> {
        self.read(ContractName::GameManager, IGameManager::getPlayerByFIDCall { fid })
            .await
            .map(|r| (r._0 != Address::ZERO).then_some(r._0))
    }
}

/// Typed writes for one chain. Signing happens in the external client.
pub struct ChainWriter<'a, C> {
    client: &'a C,
    book: &'a AddressBook,
    chain_id: ChainId,
}

impl<'a, C: ChainClient> ChainWriter<'a, C> {
    /// Creates a writer bound to `chain_id`.
    #[must_use]
    pub const fn new(client: &'a C, book: &'a AddressBook, chain_id: ChainId) -> Self {
        Self {
            client,
            book,
            chain_id,
        }
    }

    async fn write<Call: SolCall>(&self, contract: ContractName, call: Call) -> ChainResult<B256> {
        let to = self.book.resolve_deployed(self.chain_id, contract)?;
        let request = CallRequest::new(contract, to, &call)?;
        debug!(chain_id = %self.chain_id, %contract, op = request.operation, "chain write");
        self.client.send(self.chain_id, &request).await
    }

    /// Mints a gear token. Only succeeds for the minter role on-chain.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`] or client errors.
    pub async fn mint_gear(&self, call: IQuestGear::mintGearCall) -> ChainResult<B256> {
        self.write(ContractName::QuestGear, call).await
    }

    /// Equips gear token `token_id`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`] or client errors.
    pub async fn equip_gear(&self, token_id: U256) -> ChainResult<B256> {
        self.write(ContractName::QuestGear, IQuestGear::equipGearCall { tokenId: token_id })
            .await
    }

    /// Clears `slot`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`] or client errors.
    pub async fn unequip_gear(&self, slot: GearSlot) -> ChainResult<B256> {
        self.write(
            ContractName::QuestGear,
            IQuestGear::unequipGearCall { gearType: slot.code() },
        )
        .await
    }

    /// Crafts recipe `recipe_id`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`] or client errors.
    pub async fn craft(&self, recipe_id: U256) -> ChainResult<B256> {
        self.write(
            ContractName::QuestMaterials,
            IQuestMaterials::craftCall { recipeId: recipe_id },
        )
        .await
    }

    /// Registers the signer under Farcaster id `fid`.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotDeployed`] or client errors.
    pub async fn register_player(&self, fid: U256) -> ChainResult<B256> {
        self.write(ContractName::GameManager, IGameManager::registerPlayerCall { fid })
            .await
    }
}
