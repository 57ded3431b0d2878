//! Fixed game data shown until live contract reads back the pages.

use castquest_chain::{GearSlot, Rarity};

use crate::pages::dashboard::{Activity, EquippedItem};
use crate::pages::{
    Character, CraftingRecipe, InventoryItem, ItemKind, LeaderboardEntry, LeaderboardTab, Quest,
    QuestStatus, Score,
};

/// The demo character.
pub const CHARACTER: Character = Character {
    name: "@questmaster_hero",
    level: 12,
    class: "Paladin",
    xp: 2500,
    xp_to_next: 3000,
    hp: 120,
    max_hp: 120,
    attack: 45,
    defense: 38,
    luck: 22,
    recent_activity: &[
        Activity {
            action: "Defeated Goblin Raider",
            reward: "+50 XP",
            time: "2 hours ago",
        },
        Activity {
            action: "Crafted Iron Sword",
            reward: "Epic Weapon",
            time: "5 hours ago",
        },
        Activity {
            action: "Completed Shadow Puzzle",
            reward: "+100 XP",
            time: "1 day ago",
        },
        Activity {
            action: "Identified Ancient Rune",
            reward: "+30 XP",
            time: "1 day ago",
        },
        Activity {
            action: "Joined World Boss Event",
            reward: "Participation Badge",
            time: "2 days ago",
        },
    ],
    equipped: &[
        EquippedItem {
            slot: GearSlot::Weapon,
            name: "Legendary Blade",
            rarity: Rarity::Legendary,
        },
        EquippedItem {
            slot: GearSlot::Armor,
            name: "Dragon Scale Mail",
            rarity: Rarity::Epic,
        },
        EquippedItem {
            slot: GearSlot::Helmet,
            name: "Crown of Wisdom",
            rarity: Rarity::Rare,
        },
        EquippedItem {
            slot: GearSlot::Shield,
            name: "Guardian's Aegis",
            rarity: Rarity::Epic,
        },
    ],
};

const fn item(
    id: u32,
    name: &'static str,
    kind: ItemKind,
    rarity: Rarity,
    stats: &'static str,
    icon: &'static str,
) -> InventoryItem {
    InventoryItem {
        id,
        name,
        kind,
        rarity,
        stats,
        icon,
    }
}

/// The demo inventory.
pub const INVENTORY: &[InventoryItem] = &[
    item(1, "Legendary Blade", ItemKind::Equipment, Rarity::Legendary, "+50 ATK", "⚔️"),
    item(2, "Dragon Scale Mail", ItemKind::Equipment, Rarity::Epic, "+40 DEF", "🛡️"),
    item(3, "Crown of Wisdom", ItemKind::Equipment, Rarity::Rare, "+15 INT", "👑"),
    item(4, "Goblin Ear", ItemKind::Materials, Rarity::Common, "Crafting Material", "👂"),
    item(5, "Dragon Scale", ItemKind::Materials, Rarity::Epic, "Rare Material", "🐉"),
    item(6, "Health Potion", ItemKind::Consumables, Rarity::Uncommon, "Restores 50 HP", "🧪"),
    item(7, "Enchanted Scroll", ItemKind::Consumables, Rarity::Rare, "+10% XP Boost", "📜"),
    item(8, "Guardian's Aegis", ItemKind::Equipment, Rarity::Epic, "+35 DEF, +10 HP", "🛡️"),
    item(9, "Phoenix Feather", ItemKind::Materials, Rarity::Legendary, "Legendary Material", "🪶"),
    item(10, "Iron Sword", ItemKind::Equipment, Rarity::Uncommon, "+20 ATK", "⚔️"),
];

/// The demo recipe book.
pub const RECIPES: &[CraftingRecipe] = &[
    CraftingRecipe {
        id: 1,
        name: "Enchanted Blade",
        rarity: Rarity::Epic,
        ingredients: &["Iron Sword", "Dragon Scale", "Magic Essence"],
        icon: "⚔️",
        stats: "+65 ATK, +10 Crit",
    },
    CraftingRecipe {
        id: 2,
        name: "Dragon Armor",
        rarity: Rarity::Legendary,
        ingredients: &["Dragon Scale x3", "Phoenix Feather", "Ancient Rune"],
        icon: "🛡️",
        stats: "+80 DEF, +50 HP",
    },
    CraftingRecipe {
        id: 3,
        name: "Greater Health Potion",
        rarity: Rarity::Rare,
        ingredients: &["Health Potion x2", "Herb Bundle"],
        icon: "🧪",
        stats: "Restores 150 HP",
    },
    CraftingRecipe {
        id: 4,
        name: "Lucky Charm",
        rarity: Rarity::Uncommon,
        ingredients: &["Goblin Ear x3", "Gold Coin"],
        icon: "🍀",
        stats: "+15 Luck",
    },
];

/// The demo quest history.
pub const QUESTS: &[Quest] = &[
    Quest {
        id: 1,
        title: "Slay the Shadow Dragon",
        status: QuestStatus::Completed,
        action: "!attack with Legendary Blade",
        outcome: "Victory! Critical hit for 250 damage",
        rewards: &["+150 XP", "Dragon Scale x2", "Legendary Badge"],
        date: "2 hours ago",
        image: "🐉",
    },
    Quest {
        id: 2,
        title: "Identify the Ancient Rune",
        status: QuestStatus::Completed,
        action: "!guess ancient wisdom",
        outcome: "Correct! The rune translates to 'power'",
        rewards: &["+50 XP", "Magic Essence"],
        date: "1 day ago",
        image: "📿",
    },
    Quest {
        id: 3,
        title: "Defeat the Goblin Horde",
        status: QuestStatus::Failed,
        action: "!attack",
        outcome: "Defeated. Your attack was too weak.",
        rewards: &[],
        date: "1 day ago",
        image: "👹",
    },
    Quest {
        id: 4,
        title: "Solve the Crystal Puzzle",
        status: QuestStatus::InProgress,
        action: "!inspect",
        outcome: "The crystals glow with an ethereal light...",
        rewards: &["???"],
        date: "Just now",
        image: "💎",
    },
    Quest {
        id: 5,
        title: "Identify Mysterious Creature",
        status: QuestStatus::Completed,
        action: "!guess basilisk",
        outcome: "Correct! You've encountered a basilisk",
        rewards: &["+75 XP", "Rare Token"],
        date: "2 days ago",
        image: "🐍",
    },
];

const fn xp(
    rank: u32,
    name: &'static str,
    level: u16,
    xp: u64,
    avatar: &'static str,
) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        name,
        level,
        score: Score::Xp(xp),
        avatar,
    }
}

const fn crafter(
    rank: u32,
    name: &'static str,
    level: u16,
    items: u32,
    avatar: &'static str,
) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        name,
        level,
        score: Score::ItemsCrafted(items),
        avatar,
    }
}

/// All-time XP board.
pub const ALL_TIME: &[LeaderboardEntry] = &[
    xp(1, "@dragonslayer", 42, 125_000, "🐉"),
    xp(2, "@shadowmaster", 38, 98_000, "🌑"),
    xp(3, "@questlord", 35, 87_000, "⚔️"),
    xp(4, "@wizardking", 33, 76_000, "🧙"),
    xp(5, "@knightcaptain", 31, 68_000, "🛡️"),
];

/// This week's XP board.
pub const WEEKLY: &[LeaderboardEntry] = &[
    xp(1, "@speedrunner", 28, 15_000, "⚡"),
    xp(2, "@grindmaster", 25, 12_500, "💪"),
    xp(3, "@adventurer", 22, 10_000, "🗺️"),
];

/// Today's XP board.
pub const DAILY: &[LeaderboardEntry] = &[
    xp(1, "@todayschamp", 18, 3_500, "🌟"),
    xp(2, "@hustler", 16, 2_800, "🔥"),
    xp(3, "@riser", 15, 2_200, "📈"),
];

/// Crafting board.
pub const CRAFTERS: &[LeaderboardEntry] = &[
    crafter(1, "@mastersmith", 40, 287, "🔨"),
    crafter(2, "@craftguru", 36, 245, "⚒️"),
    crafter(3, "@artisan", 33, 198, "🛠️"),
];

/// Board for `tab`.
#[must_use]
pub const fn leaderboard(tab: LeaderboardTab) -> &'static [LeaderboardEntry] {
    match tab {
        LeaderboardTab::AllTime => ALL_TIME,
        LeaderboardTab::Weekly => WEEKLY,
        LeaderboardTab::Daily => DAILY,
        LeaderboardTab::Crafters => CRAFTERS,
    }
}
