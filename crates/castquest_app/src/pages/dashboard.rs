//! Character dashboard.

use castquest_chain::{GearSlot, Rarity};

use crate::format::percent;

/// A recent activity line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    /// What the player did.
    pub action: &'static str,
    /// What they got for it.
    pub reward: &'static str,
    /// Relative time.
    pub time: &'static str,
}

/// An item worn in a gear slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquippedItem {
    /// Slot.
    pub slot: GearSlot,
    /// Item name.
    pub name: &'static str,
    /// Rarity tier, drives the text colour.
    pub rarity: Rarity,
}

/// The player's character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    /// Farcaster handle.
    pub name: &'static str,
    /// Level.
    pub level: u16,
    /// Class name.
    pub class: &'static str,
    /// XP into the current level.
    pub xp: u32,
    /// XP needed for the next level.
    pub xp_to_next: u32,
    /// Current health.
    pub hp: u32,
    /// Maximum health.
    pub max_hp: u32,
    /// Attack stat.
    pub attack: u32,
    /// Defense stat.
    pub defense: u32,
    /// Luck stat.
    pub luck: u32,
    /// Newest first.
    pub recent_activity: &'static [Activity],
    /// Worn gear.
    pub equipped: &'static [EquippedItem],
}

/// A labelled progress bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meter {
    /// `2500 / 3000 XP` style caption.
    pub caption: String,
    /// Fill, 0..=100.
    pub percent: u8,
}

/// One stat tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    /// Stat name.
    pub label: &'static str,
    /// Stat value.
    pub value: u32,
}

/// One equipped gear tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GearTile {
    /// Slot label.
    pub slot: &'static str,
    /// Item name.
    pub name: &'static str,
    /// Rarity tier.
    pub rarity: Rarity,
}

/// The dashboard view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    /// Handle.
    pub name: &'static str,
    /// `Level 12`.
    pub level_label: String,
    /// Class name.
    pub class: &'static str,
    /// Experience bar.
    pub experience: Meter,
    /// Health bar.
    pub health: Meter,
    /// Attack, Defense and Luck tiles.
    pub stats: [StatTile; 3],
    /// Recent activity, as given.
    pub activity: Vec<Activity>,
    /// Equipped gear tiles.
    pub gear: Vec<GearTile>,
}

impl DashboardView {
    /// Builds the dashboard for `character`.
    #[must_use]
    pub fn new(character: &Character) -> Self {
        Self {
            name: character.name,
            level_label: format!("Level {}", character.level),
            class: character.class,
            experience: Meter {
                caption: format!("{} / {} XP", character.xp, character.xp_to_next),
                percent: percent(character.xp, character.xp_to_next),
            },
            health: Meter {
                caption: format!("{} / {}", character.hp, character.max_hp),
                percent: percent(character.hp, character.max_hp),
            },
            stats: [
                StatTile {
                    label: "Attack",
                    value: character.attack,
                },
                StatTile {
                    label: "Defense",
                    value: character.defense,
                },
                StatTile {
                    label: "Luck",
                    value: character.luck,
                },
            ],
            activity: character.recent_activity.to_vec(),
            gear: character
                .equipped
                .iter()
                .map(|item| GearTile {
                    slot: item.slot.label(),
                    name: item.name,
                    rarity: item.rarity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_mock_character() {
        let view = DashboardView::new(&mock::CHARACTER);
        assert_eq!(view.name, "@questmaster_hero");
        assert_eq!(view.level_label, "Level 12");
        assert_eq!(view.class, "Paladin");
        assert_eq!(view.experience.caption, "2500 / 3000 XP");
        assert_eq!(view.experience.percent, 83);
        assert_eq!(view.health.caption, "120 / 120");
        assert_eq!(view.health.percent, 100);
        assert_eq!(view.stats.map(|s| s.value), [45, 38, 22]);
        assert_eq!(view.activity.len(), 5);
        assert_eq!(view.gear.len(), 4);
        assert_eq!(view.gear[0].slot, "Weapon");
        assert_eq!(view.gear[0].rarity, Rarity::Legendary);
    }

    #[test]
    fn test_xp_bar_clamps() {
        let character = Character {
            xp: 5000,
            xp_to_next: 3000,
            hp: 0,
            max_hp: 0,
            ..mock::CHARACTER
        };
        let view = DashboardView::new(&character);
        assert_eq!(view.experience.percent, 100);
        assert_eq!(view.health.percent, 0);
    }
}
