//! Quest log: past and running quests with their outcomes.

use super::{tab_strip, TabView};

/// Outcome of a quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestStatus {
    /// Finished successfully.
    Completed,
    /// Still running.
    InProgress,
    /// Finished unsuccessfully.
    Failed,
}

impl QuestStatus {
    /// Status badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Failed => "Failed",
        }
    }
}

/// A quest entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quest {
    /// Quest id.
    pub id: u32,
    /// Quest title.
    pub title: &'static str,
    /// Current status.
    pub status: QuestStatus,
    /// The cast command the player used.
    pub action: &'static str,
    /// What happened.
    pub outcome: &'static str,
    /// Rewards earned, possibly none.
    pub rewards: &'static [&'static str],
    /// Relative time.
    pub date: &'static str,
    /// Emoji image.
    pub image: &'static str,
}

/// Quest log filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuestTab {
    /// No filter.
    #[default]
    All,
    /// Completed quests.
    Completed,
    /// Running quests.
    InProgress,
    /// Failed quests.
    Failed,
}

impl QuestTab {
    /// Tab strip order.
    pub const ALL: [Self; 4] = [Self::All, Self::Completed, Self::InProgress, Self::Failed];

    /// Tab text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Quests",
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Failed => "Failed",
        }
    }

    /// Whether a quest with `status` is shown under this tab.
    #[must_use]
    pub const fn matches(self, status: QuestStatus) -> bool {
        matches!(
            (self, status),
            (Self::All, _)
                | (Self::Completed, QuestStatus::Completed)
                | (Self::InProgress, QuestStatus::InProgress)
                | (Self::Failed, QuestStatus::Failed)
        )
    }
}

/// One rendered quest card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestCard {
    /// Quest id.
    pub id: u32,
    /// Emoji image.
    pub image: &'static str,
    /// Quest title.
    pub title: &'static str,
    /// Status, drives icon and colour.
    pub status: QuestStatus,
    /// Status badge text.
    pub status_label: &'static str,
    /// Relative time.
    pub date: &'static str,
    /// The cast command.
    pub action: &'static str,
    /// What happened.
    pub outcome: &'static str,
    /// Reward badges; `None` hides the rewards row.
    pub rewards: Option<Vec<&'static str>>,
}

/// The quest log view model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestLogView {
    /// Tab strip.
    pub tabs: Vec<TabView>,
    /// Cards under the active tab.
    pub cards: Vec<QuestCard>,
}

/// Quest log UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestLogPage {
    tab: QuestTab,
}

impl QuestLogPage {
    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> QuestTab {
        self.tab
    }

    /// Switches tab.
    pub fn select(&mut self, tab: QuestTab) {
        self.tab = tab;
    }

    /// Renders `quests` under the active tab.
    #[must_use]
    pub fn render(&self, quests: &[Quest]) -> QuestLogView {
        let cards = quests
            .iter()
            .filter(|quest| self.tab.matches(quest.status))
            .map(|quest| QuestCard {
                id: quest.id,
                image: quest.image,
                title: quest.title,
                status: quest.status,
                status_label: quest.status.label(),
                date: quest.date,
                action: quest.action,
                outcome: quest.outcome,
                rewards: (!quest.rewards.is_empty()).then(|| quest.rewards.to_vec()),
            })
            .collect();

        QuestLogView {
            tabs: tab_strip(&QuestTab::ALL, self.tab, QuestTab::label),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_tab_filters() {
        let mut page = QuestLogPage::default();
        assert_eq!(page.render(mock::QUESTS).cards.len(), 5);

        for (tab, status, expected) in [
            (QuestTab::Completed, QuestStatus::Completed, 3),
            (QuestTab::InProgress, QuestStatus::InProgress, 1),
            (QuestTab::Failed, QuestStatus::Failed, 1),
        ] {
            page.select(tab);
            let view = page.render(mock::QUESTS);
            assert_eq!(view.cards.len(), expected, "{tab:?}");
            assert!(view.cards.iter().all(|c| c.status == status));
            let active: Vec<_> = view.tabs.iter().filter(|t| t.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].label, tab.label());
        }
    }

    #[test]
    fn test_failed_quest_hides_rewards() {
        let mut page = QuestLogPage::default();
        page.select(QuestTab::Failed);
        let view = page.render(mock::QUESTS);
        assert_eq!(view.cards[0].title, "Defeat the Goblin Horde");
        assert_eq!(view.cards[0].rewards, None);
    }

    #[test]
    fn test_status_labels() {
        let view = QuestLogPage::default().render(mock::QUESTS);
        let in_progress = view
            .cards
            .iter()
            .find(|c| c.status == QuestStatus::InProgress)
            .unwrap();
        assert_eq!(in_progress.status_label, "In Progress");
        assert_eq!(in_progress.rewards, Some(vec!["???"]));
    }
}
