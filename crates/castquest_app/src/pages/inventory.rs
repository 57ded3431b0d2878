//! Inventory page: collected items, filtered by category.

use castquest_chain::Rarity;

use super::{tab_strip, TabView};

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Wearable gear.
    Equipment,
    /// Crafting inputs.
    Materials,
    /// Single-use items.
    Consumables,
}

impl ItemKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::Materials => "Materials",
            Self::Consumables => "Consumables",
        }
    }
}

/// An item in the player's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    /// Item id.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Category.
    pub kind: ItemKind,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Stat summary.
    pub stats: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
}

/// Inventory filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InventoryTab {
    /// No filter.
    #[default]
    All,
    /// Equipment only.
    Equipment,
    /// Materials only.
    Materials,
    /// Consumables only.
    Consumables,
}

impl InventoryTab {
    /// Tab strip order.
    pub const ALL: [Self; 4] = [Self::All, Self::Equipment, Self::Materials, Self::Consumables];

    /// Tab text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Equipment => "Equipment",
            Self::Materials => "Materials",
            Self::Consumables => "Consumables",
        }
    }

    /// Whether an item of `kind` is shown under this tab.
    #[must_use]
    pub const fn matches(self, kind: ItemKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _)
                | (Self::Equipment, ItemKind::Equipment)
                | (Self::Materials, ItemKind::Materials)
                | (Self::Consumables, ItemKind::Consumables)
        )
    }
}

/// What the item card's button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemAction {
    /// Equipment goes into a slot.
    Equip,
    /// Everything else is used.
    Use,
}

impl ItemAction {
    /// Button text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equip => "Equip",
            Self::Use => "Use",
        }
    }
}

/// One rendered item card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemCard {
    /// Item id.
    pub id: u32,
    /// Emoji icon.
    pub icon: &'static str,
    /// Rarity tier, drives the card border.
    pub rarity: Rarity,
    /// Badge text, e.g. `EPIC`.
    pub badge: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Category label.
    pub kind: &'static str,
    /// Stat summary.
    pub stats: &'static str,
    /// Button action.
    pub action: ItemAction,
}

/// The inventory page view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryView {
    /// Items owned, regardless of filter.
    pub total_items: usize,
    /// Tab strip.
    pub tabs: Vec<TabView>,
    /// Cards under the active tab.
    pub cards: Vec<ItemCard>,
}

/// Inventory page UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventoryPage {
    tab: InventoryTab,
}

impl InventoryPage {
    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> InventoryTab {
        self.tab
    }

    /// Switches tab.
    pub fn select(&mut self, tab: InventoryTab) {
        self.tab = tab;
    }

    /// Renders `items` under the active tab.
    #[must_use]
    pub fn render(&self, items: &[InventoryItem]) -> InventoryView {
        let cards = items
            .iter()
            .filter(|item| self.tab.matches(item.kind))
            .map(|item| ItemCard {
                id: item.id,
                icon: item.icon,
                rarity: item.rarity,
                badge: item.rarity.badge(),
                name: item.name,
                kind: item.kind.label(),
                stats: item.stats,
                action: match item.kind {
                    ItemKind::Equipment => ItemAction::Equip,
                    ItemKind::Materials | ItemKind::Consumables => ItemAction::Use,
                },
            })
            .collect();

        InventoryView {
            total_items: items.len(),
            tabs: tab_strip(&InventoryTab::ALL, self.tab, InventoryTab::label),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_all_tab_shows_everything() {
        let view = InventoryPage::default().render(mock::INVENTORY);
        assert_eq!(view.total_items, 10);
        assert_eq!(view.cards.len(), 10);
        assert_eq!(view.tabs.iter().filter(|t| t.active).count(), 1);
        assert_eq!(view.tabs[0].label, "All");
    }

    #[test]
    fn test_filter_matches_kind() {
        let mut page = InventoryPage::default();
        for (tab, kind, expected) in [
            (InventoryTab::Equipment, ItemKind::Equipment, 5),
            (InventoryTab::Materials, ItemKind::Materials, 3),
            (InventoryTab::Consumables, ItemKind::Consumables, 2),
        ] {
            page.select(tab);
            let view = page.render(mock::INVENTORY);
            assert_eq!(view.cards.len(), expected, "{tab:?}");
            assert!(view.cards.iter().all(|c| c.kind == kind.label()));
            // total ignores the filter
            assert_eq!(view.total_items, 10);
        }
    }

    #[test]
    fn test_action_labels() {
        let view = InventoryPage::default().render(mock::INVENTORY);
        for card in &view.cards {
            let expected = if card.kind == "Equipment" { "Equip" } else { "Use" };
            assert_eq!(card.action.label(), expected);
        }
    }

    #[test]
    fn test_empty_inventory() {
        let view = InventoryPage::default().render(&[]);
        assert_eq!(view.total_items, 0);
        assert!(view.cards.is_empty());
    }
}
