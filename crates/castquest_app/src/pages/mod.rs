//! # Pages
//!
//! One module per route. Each exposes the page's data types, its
//! ephemeral UI state (selected tab), and a `render` that turns data into
//! a view model. Rendering never mutates anything.

pub mod crafting;
pub mod dashboard;
pub mod inventory;
pub mod leaderboards;
pub mod quest_log;

pub use crafting::{CraftingPage, CraftingRecipe, CraftingView};
pub use dashboard::{Character, DashboardView};
pub use inventory::{InventoryItem, InventoryPage, InventoryTab, InventoryView, ItemKind};
pub use leaderboards::{LeaderboardEntry, LeaderboardPage, LeaderboardTab, LeaderboardView, Score};
pub use quest_log::{Quest, QuestLogPage, QuestLogView, QuestStatus, QuestTab};

/// A tab in a page's tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabView {
    /// Tab text.
    pub label: &'static str,
    /// Whether this tab is selected.
    pub active: bool,
}

/// Builds a tab strip with `active` selected.
pub(crate) fn tab_strip<T: Copy + PartialEq>(
    all: &[T],
    active: T,
    label: impl Fn(T) -> &'static str,
) -> Vec<TabView> {
    all.iter()
        .map(|&tab| TabView {
            label: label(tab),
            active: tab == active,
        })
        .collect()
}
