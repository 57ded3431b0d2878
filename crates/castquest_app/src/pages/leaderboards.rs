//! Leaderboards: XP boards by period, plus the crafting board.

use super::{tab_strip, TabView};
use crate::format::thousands;

/// What a board ranks by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    /// Experience points.
    Xp(u64),
    /// Items crafted.
    ItemsCrafted(u32),
}

impl Score {
    /// Formatted value, e.g. `125,000`.
    #[must_use]
    pub fn value(self) -> String {
        match self {
            Self::Xp(xp) => thousands(xp),
            Self::ItemsCrafted(items) => thousands(u64::from(items)),
        }
    }

    /// Unit caption.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Xp(_) => "XP",
            Self::ItemsCrafted(_) => "Items Crafted",
        }
    }
}

/// A row on a leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based rank.
    pub rank: u32,
    /// Farcaster handle.
    pub name: &'static str,
    /// Player level.
    pub level: u16,
    /// Ranked score.
    pub score: Score,
    /// Emoji avatar.
    pub avatar: &'static str,
}

/// Which board is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LeaderboardTab {
    /// All-time XP.
    #[default]
    AllTime,
    /// XP this week.
    Weekly,
    /// XP today.
    Daily,
    /// Items crafted.
    Crafters,
}

impl LeaderboardTab {
    /// Tab strip order.
    pub const ALL: [Self; 4] = [Self::AllTime, Self::Weekly, Self::Daily, Self::Crafters];

    /// Tab text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllTime => "All-Time XP",
            Self::Weekly => "Weekly",
            Self::Daily => "Daily",
            Self::Crafters => "Master Crafters",
        }
    }
}

/// Podium placing for ranks 1 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Podium {
    /// Rank 1.
    Gold,
    /// Rank 2.
    Silver,
    /// Rank 3.
    Bronze,
}

impl Podium {
    /// Placing for `rank`, if on the podium.
    #[must_use]
    pub const fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// One rendered leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// Trophy for the top three.
    pub podium: Option<Podium>,
    /// `#4` style rank text, shown when off the podium.
    pub rank_label: String,
    /// Emoji avatar.
    pub avatar: &'static str,
    /// Farcaster handle.
    pub name: &'static str,
    /// `Level 42`.
    pub level_label: String,
    /// Formatted score.
    pub score: String,
    /// Score caption.
    pub unit: &'static str,
}

/// The leaderboard view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardView {
    /// Tab strip.
    pub tabs: Vec<TabView>,
    /// Rows of the active board, in rank order.
    pub rows: Vec<LeaderboardRow>,
}

/// Leaderboard UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardPage {
    tab: LeaderboardTab,
}

impl LeaderboardPage {
    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> LeaderboardTab {
        self.tab
    }

    /// Switches tab.
    pub fn select(&mut self, tab: LeaderboardTab) {
        self.tab = tab;
    }

    /// Renders the active board. `boards` supplies the entries per tab.
    #[must_use]
    pub fn render(
        &self,
        boards: impl Fn(LeaderboardTab) -> &'static [LeaderboardEntry],
    ) -> LeaderboardView {
        let mut entries = boards(self.tab).to_vec();
        entries.sort_by_key(|e| e.rank);

        let rows = entries
            .into_iter()
            .map(|entry| LeaderboardRow {
                podium: Podium::for_rank(entry.rank),
                rank_label: format!("#{}", entry.rank),
                avatar: entry.avatar,
                name: entry.name,
                level_label: format!("Level {}", entry.level),
                score: entry.score.value(),
                unit: entry.score.unit(),
            })
            .collect();

        LeaderboardView {
            tabs: tab_strip(&LeaderboardTab::ALL, self.tab, LeaderboardTab::label),
            rows,
        }
    }
}
