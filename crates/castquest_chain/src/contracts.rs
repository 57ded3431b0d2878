//! # Contract Definitions
//!
//! Solidity interfaces for the three CastQuest contracts, plus the Rust
//! shapes their reads decode into.

// The sol! macro generates code that we can't document, so allow missing_docs
#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use alloy_sol_types::sol;

use crate::error::ChainError;

sol! {
    /// Equipment NFTs. Each token carries fixed combat stats.
    #[derive(Debug)]
    interface IQuestGear {
        /// Mints a gear token (minter role only).
        function mintGear(
            address to,
            uint8 gearType,
            uint8 rarity,
            uint16 attack,
            uint16 defense,
            uint16 bonus,
            string bonusType,
            string tokenURI
        ) external returns (uint256);

        /// Equips a token the caller owns into its slot.
        function equipGear(uint256 tokenId) external;

        /// Clears a slot.
        function unequipGear(uint8 gearType) external;

        /// Token ids currently equipped by `player` (0 = empty slot).
        function getEquippedGear(address player) external view returns (
            uint256 weapon,
            uint256 armor,
            uint256 helmet,
            uint256 shield
        );

        /// Summed attack/defense of the equipped set.
        function getPlayerStats(address player) external view returns (
            uint256 totalAttack,
            uint256 totalDefense
        );

        /// Public getter for the per-token stats mapping.
        function gearStats(uint256) external view returns (
            uint8 gearType,
            uint8 rarity,
            uint16 attack,
            uint16 defense,
            uint16 bonus,
            string bonusType,
            uint256 mintedAt
        );
    }
}

sol! {
    /// Fungible crafting materials and the recipes that consume them.
    #[derive(Debug)]
    interface IQuestMaterials {
        /// Burns the recipe inputs and mints its output.
        function craft(uint256 recipeId) external;

        /// Recipe inputs and output.
        function getRecipe(uint256 recipeId) external view returns (
            uint256[] requiredTokenIds,
            uint256[] requiredAmounts,
            uint256 outputTokenId,
            uint256 outputAmount
        );

        /// ERC-1155 balance.
        function balanceOf(address account, uint256 id) external view returns (uint256);

        /// Public getter for the material name mapping.
        function materialNames(uint256) external view returns (string);
    }
}

sol! {
    /// Player registry and progression.
    #[derive(Debug)]
    interface IGameManager {
        /// Links the caller's address to a Farcaster id.
        function registerPlayer(uint256 fid) external;

        /// Progression snapshot for `player`.
        function getPlayerData(address player) external view returns (
            uint256 xp,
            uint16 level,
            uint256 questsCompleted,
            uint256 xpToNextLevel
        );

        /// Whether the quest cooldown has elapsed.
        function canCompleteQuest(address player) external view returns (bool);

        /// Address registered for a Farcaster id.
        function getPlayerByFID(uint256 fid) external view returns (address);
    }
}

/// The deployed CastQuest contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractName {
    /// Gear registry (equipment NFTs).
    QuestGear,
    /// Materials registry (crafting inputs).
    QuestMaterials,
    /// Player progression.
    GameManager,
}

impl ContractName {
    /// All contracts, in address-table order.
    pub const ALL: [Self; 3] = [Self::QuestGear, Self::QuestMaterials, Self::GameManager];

    /// Name as it appears in the address table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuestGear => "QuestGear",
            Self::QuestMaterials => "QuestMaterials",
            Self::GameManager => "GameManager",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QuestGear" | "GearRegistry" => Ok(Self::QuestGear),
            "QuestMaterials" | "MaterialsRegistry" => Ok(Self::QuestMaterials),
            "GameManager" => Ok(Self::GameManager),
            other => Err(ChainError::UnknownContract(other.to_string())),
        }
    }
}

/// Item rarity. The discriminant is the on-chain `uint8` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rarity {
    /// Code 0.
    Common = 0,
    /// Code 1.
    Uncommon = 1,
    /// Code 2.
    Rare = 2,
    /// Code 3.
    Epic = 3,
    /// Code 4.
    Legendary = 4,
}

impl Rarity {
    /// Decodes the on-chain rarity code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Common),
            1 => Some(Self::Uncommon),
            2 => Some(Self::Rare),
            3 => Some(Self::Epic),
            4 => Some(Self::Legendary),
            _ => None,
        }
    }

    /// On-chain code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name, e.g. `"epic"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// Badge text, e.g. `"EPIC"`.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Common => "COMMON",
            Self::Uncommon => "UNCOMMON",
            Self::Rare => "RARE",
            Self::Epic => "EPIC",
            Self::Legendary => "LEGENDARY",
        }
    }
}

/// Equipment slot. The discriminant is the on-chain `gearType` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GearSlot {
    /// Code 0.
    Weapon = 0,
    /// Code 1.
    Armor = 1,
    /// Code 2.
    Helmet = 2,
    /// Code 3.
    Shield = 3,
}

impl GearSlot {
    /// All slots in `getEquippedGear` output order.
    pub const ALL: [Self; 4] = [Self::Weapon, Self::Armor, Self::Helmet, Self::Shield];

    /// Decodes the on-chain gear type.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Weapon),
            1 => Some(Self::Armor),
            2 => Some(Self::Helmet),
            3 => Some(Self::Shield),
            _ => None,
        }
    }

    /// On-chain code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Helmet => "Helmet",
            Self::Shield => "Shield",
        }
    }
}

/// Stats of a single gear token, as returned by `gearStats`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GearStats {
    /// Raw gear type code.
    pub gear_type: u8,
    /// Raw rarity code.
    pub rarity: u8,
    /// Attack bonus.
    pub attack: u16,
    /// Defense bonus.
    pub defense: u16,
    /// Extra bonus amount.
    pub bonus: u16,
    /// What the extra bonus applies to.
    pub bonus_type: String,
    /// Mint timestamp (seconds).
    pub minted_at: U256,
}

impl GearStats {
    /// Slot this gear goes into, if the code is known.
    #[must_use]
    pub const fn slot(&self) -> Option<GearSlot> {
        GearSlot::from_code(self.gear_type)
    }

    /// Rarity tier, if the code is known.
    #[must_use]
    pub const fn rarity_tier(&self) -> Option<Rarity> {
        Rarity::from_code(self.rarity)
    }
}

impl From<IQuestGear::gearStatsReturn> for GearStats {
    fn from(r: IQuestGear::gearStatsReturn) -> Self {
        Self {
            gear_type: r.gearType,
            rarity: r.rarity,
            attack: r.attack,
            defense: r.defense,
            bonus: r.bonus,
            bonus_type: r.bonusType,
            minted_at: r.mintedAt,
        }
    }
}

/// Token ids in each slot. Zero means the slot is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquippedGear {
    /// Weapon token.
    pub weapon: U256,
    /// Armor token.
    pub armor: U256,
    /// Helmet token.
    pub helmet: U256,
    /// Shield token.
    pub shield: U256,
}

impl EquippedGear {
    /// Token in `slot`, or `None` if empty.
    #[must_use]
    pub fn get(&self, slot: GearSlot) -> Option<U256> {
        let token = match slot {
            GearSlot::Weapon => self.weapon,
            GearSlot::Armor => self.armor,
            GearSlot::Helmet => self.helmet,
            GearSlot::Shield => self.shield,
        };
        (token != U256::ZERO).then_some(token)
    }
}

impl From<IQuestGear::getEquippedGearReturn> for EquippedGear {
    fn from(r: IQuestGear::getEquippedGearReturn) -> Self {
        Self {
            weapon: r.weapon,
            armor: r.armor,
            helmet: r.helmet,
            shield: r.shield,
        }
    }
}

/// Aggregate combat stats of the equipped set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Summed attack.
    pub total_attack: U256,
    /// Summed defense.
    pub total_defense: U256,
}

impl From<IQuestGear::getPlayerStatsReturn> for PlayerStats {
    fn from(r: IQuestGear::getPlayerStatsReturn) -> Self {
        Self {
            total_attack: r.totalAttack,
            total_defense: r.totalDefense,
        }
    }
}

/// Progression snapshot from `getPlayerData`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerData {
    /// Total experience.
    pub xp: U256,
    /// Current level.
    pub level: u16,
    /// Quests completed so far.
    pub quests_completed: U256,
    /// Experience still needed for the next level.
    pub xp_to_next_level: U256,
}

impl From<IGameManager::getPlayerDataReturn> for PlayerData {
    fn from(r: IGameManager::getPlayerDataReturn) -> Self {
        Self {
            xp: r.xp,
            level: r.level,
            quests_completed: r.questsCompleted,
            xp_to_next_level: r.xpToNextLevel,
        }
    }
}

/// A crafting recipe from `getRecipe`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeDescriptor {
    /// Material ids consumed.
    pub required_token_ids: Vec<U256>,
    /// Amount of each consumed material, index-aligned with the ids.
    pub required_amounts: Vec<U256>,
    /// Material id produced.
    pub output_token_id: U256,
    /// Amount produced.
    pub output_amount: U256,
}

impl RecipeDescriptor {
    /// `(material id, amount)` pairs.
    pub fn ingredients(&self) -> impl Iterator<Item = (U256, U256)> + '_ {
        self.required_token_ids
            .iter()
            .copied()
            .zip(self.required_amounts.iter().copied())
    }
}

impl From<IQuestMaterials::getRecipeReturn> for RecipeDescriptor {
    fn from(r: IQuestMaterials::getRecipeReturn) -> Self {
        Self {
            required_token_ids: r.requiredTokenIds,
            required_amounts: r.requiredAmounts,
            output_token_id: r.outputTokenId,
            output_amount: r.outputAmount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_name_parse_both_spellings() {
        assert_eq!("QuestGear".parse::<ContractName>(), Ok(ContractName::QuestGear));
        assert_eq!("GearRegistry".parse::<ContractName>(), Ok(ContractName::QuestGear));
        assert_eq!(
            "MaterialsRegistry".parse::<ContractName>(),
            Ok(ContractName::QuestMaterials)
        );
        assert_eq!(
            "Vault".parse::<ContractName>(),
            Err(ChainError::UnknownContract("Vault".to_string()))
        );
    }

    #[test]
    fn test_rarity_codes() {
        for code in 0..=4u8 {
            let rarity = Rarity::from_code(code).unwrap();
            assert_eq!(rarity.code(), code);
        }
        assert!(Rarity::from_code(5).is_none());
        assert!(Rarity::Legendary > Rarity::Epic);
        assert_eq!(Rarity::Epic.badge(), "EPIC");
    }

    #[test]
    fn test_equipped_gear_empty_slot() {
        let gear = EquippedGear {
            weapon: U256::from(7),
            ..EquippedGear::default()
        };
        assert_eq!(gear.get(GearSlot::Weapon), Some(U256::from(7)));
        assert_eq!(gear.get(GearSlot::Shield), None);
    }

    #[test]
    fn test_recipe_ingredients_pairs() {
        let recipe = RecipeDescriptor {
            required_token_ids: vec![U256::from(1), U256::from(4)],
            required_amounts: vec![U256::from(3), U256::from(1)],
            output_token_id: U256::from(9),
            output_amount: U256::from(1),
        };
        let pairs: Vec<_> = recipe.ingredients().collect();
        assert_eq!(pairs, vec![(U256::from(1), U256::from(3)), (U256::from(4), U256::from(1))]);
    }

    #[test]
    fn test_gear_stats_codes() {
        let stats = GearStats {
            gear_type: 3,
            rarity: 3,
            attack: 0,
            defense: 35,
            bonus: 10,
            bonus_type: "HP".to_string(),
            minted_at: U256::ZERO,
        };
        assert_eq!(stats.slot(), Some(GearSlot::Shield));
        assert_eq!(stats.rarity_tier(), Some(Rarity::Epic));
    }
}
