//! Client-side routes.

/// A dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/inventory`
    Inventory,
    /// `/crafting`
    Crafting,
    /// `/quests`
    QuestLog,
    /// `/leaderboards`
    Leaderboards,
    /// Anything else.
    NotFound,
}

impl Route {
    /// Routes shown in the navigation bar, in order.
    pub const NAV: [Self; 5] = [
        Self::Dashboard,
        Self::Inventory,
        Self::Crafting,
        Self::QuestLog,
        Self::Leaderboards,
    ];

    /// Matches a location path. Query strings, fragments and a trailing
    /// slash are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::NAV
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Self::NotFound)
    }

    /// Canonical path. `NotFound` has none and reports `"*"`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Inventory => "/inventory",
            Self::Crafting => "/crafting",
            Self::QuestLog => "/quests",
            Self::Leaderboards => "/leaderboards",
            Self::NotFound => "*",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Crafting => "Crafting",
            Self::QuestLog => "Quest Log",
            Self::Leaderboards => "Leaderboards",
            Self::NotFound => "Not Found",
        }
    }
}
