//! # Contract Interface Registry
//!
//! Static description of every callable operation on the three contracts.
//! Consumed by whatever external client performs the call; nothing here
//! touches the network.
//!
//! The registry cannot check itself against deployed bytecode. Instead the
//! tests pin each descriptor's selector to the matching `sol!` binding in
//! [`crate::contracts`].

use alloy_primitives::keccak256;
use serde_json::{json, Value};

use crate::contracts::ContractName;
use AbiType::{Address, Bool, String as Str, Uint16, Uint256, Uint256Array, Uint8};
use StateMutability::{NonPayable, View};

/// Solidity types used across the CastQuest interfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// 20-byte account or contract address.
    Address,
    /// Boolean.
    Bool,
    /// `uint8`.
    Uint8,
    /// `uint16`.
    Uint16,
    /// `uint256`.
    Uint256,
    /// UTF-8 string.
    String,
    /// `uint256[]`.
    Uint256Array,
}

impl AbiType {
    /// Canonical Solidity type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Bool => "bool",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint256 => "uint256",
            Self::String => "string",
            Self::Uint256Array => "uint256[]",
        }
    }

    /// Whether the ABI encoding is dynamically sized.
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::String | Self::Uint256Array)
    }
}

/// A named, typed parameter or return value. Unnamed ones use `""`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: &'static str,
    /// Parameter type.
    pub ty: AbiType,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub const fn new(name: &'static str, ty: AbiType) -> Self {
        Self { name, ty }
    }
}

/// Mutability class of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateMutability {
    /// Read-only.
    View,
    /// State-changing, no ether attached.
    NonPayable,
}

impl StateMutability {
    /// ABI JSON spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::NonPayable => "nonpayable",
        }
    }
}

/// One callable contract operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Function name.
    pub name: &'static str,
    /// Mutability class.
    pub mutability: StateMutability,
    /// Ordered inputs.
    pub inputs: &'static [Param],
    /// Ordered outputs.
    pub outputs: &'static [Param],
}

impl OperationDescriptor {
    /// True for `view` operations.
    #[inline]
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self.mutability, StateMutability::View)
    }

    /// Input names, in order.
    pub fn input_names(&self) -> impl Iterator<Item = &'static str> {
        self.inputs.iter().map(|p| p.name)
    }

    /// Input types, in order.
    pub fn input_types(&self) -> impl Iterator<Item = AbiType> {
        self.inputs.iter().map(|p| p.ty)
    }

    /// Output types, in order.
    pub fn output_types(&self) -> impl Iterator<Item = AbiType> {
        self.outputs.iter().map(|p| p.ty)
    }

    /// Canonical signature, e.g. `balanceOf(address,uint256)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.input_types().map(AbiType::as_str).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// First four bytes of the keccak-256 hash of the signature.
    #[must_use]
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Standard JSON ABI entry for this function.
    #[must_use]
    pub fn to_json_abi(&self) -> Value {
        let params = |list: &[Param]| -> Vec<Value> {
            list.iter()
                .map(|p| json!({ "name": p.name, "type": p.ty.as_str() }))
                .collect()
        };
        json!({
            "name": self.name,
            "type": "function",
            "stateMutability": self.mutability.as_str(),
            "inputs": params(self.inputs),
            "outputs": params(self.outputs),
        })
    }
}

/// All operations of one contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractInterface {
    /// Which contract.
    pub contract: ContractName,
    /// Its operations, in declaration order.
    pub operations: &'static [OperationDescriptor],
}

impl ContractInterface {
    /// Finds an operation by function name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&'static OperationDescriptor> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Finds an operation by 4-byte selector.
    #[must_use]
    pub fn operation_by_selector(&self, selector: [u8; 4]) -> Option<&'static OperationDescriptor> {
        self.operations.iter().find(|op| op.selector() == selector)
    }

    /// Read-only operations.
    pub fn reads(&self) -> impl Iterator<Item = &'static OperationDescriptor> {
        self.operations.iter().filter(|op| op.is_read_only())
    }

    /// State-changing operations.
    pub fn writes(&self) -> impl Iterator<Item = &'static OperationDescriptor> {
        self.operations.iter().filter(|op| !op.is_read_only())
    }

    /// The whole interface as a JSON ABI array.
    #[must_use]
    pub fn to_json_abi(&self) -> Value {
        Value::Array(self.operations.iter().map(OperationDescriptor::to_json_abi).collect())
    }
}

/// `QuestGear` operations.
pub const QUEST_GEAR: ContractInterface = ContractInterface {
    contract: ContractName::QuestGear,
    operations: &[
        OperationDescriptor {
            name: "mintGear",
            mutability: NonPayable,
            inputs: &[
                Param::new("to", Address),
                Param::new("gearType", Uint8),
                Param::new("rarity", Uint8),
                Param::new("attack", Uint16),
                Param::new("defense", Uint16),
                Param::new("bonus", Uint16),
                Param::new("bonusType", Str),
                Param::new("tokenURI", Str),
            ],
            outputs: &[Param::new("", Uint256)],
        },
        OperationDescriptor {
            name: "equipGear",
            mutability: NonPayable,
            inputs: &[Param::new("tokenId", Uint256)],
            outputs: &[],
        },
        OperationDescriptor {
            name: "unequipGear",
            mutability: NonPayable,
            inputs: &[Param::new("gearType", Uint8)],
            outputs: &[],
        },
        OperationDescriptor {
            name: "getEquippedGear",
            mutability: View,
            inputs: &[Param::new("player", Address)],
            outputs: &[
                Param::new("weapon", Uint256),
                Param::new("armor", Uint256),
                Param::new("helmet", Uint256),
                Param::new("shield", Uint256),
            ],
        },
        OperationDescriptor {
            name: "getPlayerStats",
            mutability: View,
            inputs: &[Param::new("player", Address)],
            outputs: &[
                Param::new("totalAttack", Uint256),
                Param::new("totalDefense", Uint256),
            ],
        },
        OperationDescriptor {
            name: "gearStats",
            mutability: View,
            inputs: &[Param::new("", Uint256)],
            outputs: &[
                Param::new("gearType", Uint8),
                Param::new("rarity", Uint8),
                Param::new("attack", Uint16),
                Param::new("defense", Uint16),
                Param::new("bonus", Uint16),
                Param::new("bonusType", Str),
                Param::new("mintedAt", Uint256),
            ],
        },
    ],
};

/// `QuestMaterials` operations.
pub const QUEST_MATERIALS: ContractInterface = ContractInterface {
    contract: ContractName::QuestMaterials,
    operations: &[
        OperationDescriptor {
            name: "craft",
            mutability: NonPayable,
            inputs: &[Param::new("recipeId", Uint256)],
            outputs: &[],
        },
        OperationDescriptor {
            name: "getRecipe",
            mutability: View,
            inputs: &[Param::new("recipeId", Uint256)],
            outputs: &[
                Param::new("requiredTokenIds", Uint256Array),
                Param::new("requiredAmounts", Uint256Array),
                Param::new("outputTokenId", Uint256),
                Param::new("outputAmount", Uint256),
            ],
        },
        OperationDescriptor {
            name: "balanceOf",
            mutability: View,
            inputs: &[Param::new("account", Address), Param::new("id", Uint256)],
            outputs: &[Param::new("", Uint256)],
        },
        OperationDescriptor {
            name: "materialNames",
            mutability: View,
            inputs: &[Param::new("", Uint256)],
            outputs: &[Param::new("", Str)],
        },
    ],
};

/// `GameManager` operations.
pub const GAME_MANAGER: ContractInterface = ContractInterface {
    contract: ContractName::GameManager,
    operations: &[
        OperationDescriptor {
            name: "registerPlayer",
            mutability: NonPayable,
            inputs: &[Param::new("fid", Uint256)],
            outputs: &[],
        },
        OperationDescriptor {
            name: "getPlayerData",
            mutability: View,
            inputs: &[Param::new("player", Address)],
            outputs: &[
                Param::new("xp", Uint256),
                Param::new("level", Uint16),
                Param::new("questsCompleted", Uint256),
                Param::new("xpToNextLevel", Uint256),
            ],
        },
        OperationDescriptor {
            name: "canCompleteQuest",
            mutability: View,
            inputs: &[Param::new("player", Address)],
            outputs: &[Param::new("", Bool)],
        },
        OperationDescriptor {
            name: "getPlayerByFID",
            mutability: View,
            inputs: &[Param::new("fid", Uint256)],
            outputs: &[Param::new("", Address)],
        },
    ],
};

/// Interface for `contract`.
#[must_use]
pub const fn interface(contract: ContractName) -> &'static ContractInterface {
    match contract {
        ContractName::QuestGear => &QUEST_GEAR,
        ContractName::QuestMaterials => &QUEST_MATERIALS,
        ContractName::GameManager => &GAME_MANAGER,
    }
}
