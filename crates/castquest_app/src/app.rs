//! # Application Context
//!
//! [`App`] owns everything that outlives a single page: the loaded
//! configuration, the contract address book, the wallet session and the
//! current route. Per-page UI state (selected tab, crafting slots) lives
//! here too so it survives navigating away and back.

use alloy_primitives::Address;
use castquest_chain::{
    AddressBook, ChainId, ContractName, SessionHandle, SessionState, WalletConnector,
    WalletEvent, WalletSession,
};
use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::layout::{navigation, Header, NavItem};
use crate::mock;
use crate::pages::{
    CraftingPage, CraftingView, DashboardView, InventoryPage, InventoryView, LeaderboardPage,
    LeaderboardView, QuestLogPage, QuestLogView,
};
use crate::routes::Route;

/// Chain used to resolve contracts while no wallet is connected.
pub const FALLBACK_CHAIN: ChainId = ChainId::BASE_SEPOLIA;

/// The view model of whichever page is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    /// `/`
    Dashboard(DashboardView),
    /// `/inventory`
    Inventory(InventoryView),
    /// `/crafting`
    Crafting(CraftingView),
    /// `/quests`
    QuestLog(QuestLogView),
    /// `/leaderboards`
    Leaderboards(LeaderboardView),
    /// Unmatched location.
    NotFound {
        /// The path that did not match.
        path: String,
    },
}

/// A full rendered frame: header, navigation and page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Sticky header.
    pub header: Header,
    /// Navigation bar.
    pub nav: Vec<NavItem>,
    /// Active page.
    pub page: PageView,
}

/// The dashboard application.
pub struct App<W> {
    config: AppConfig,
    book: AddressBook,
    session: WalletSession<W>,
    route: Route,
    path: String,
    inventory: InventoryPage,
    crafting: CraftingPage,
    quest_log: QuestLogPage,
    leaderboards: LeaderboardPage,
}

impl<W: WalletConnector> App<W> {
    /// Builds the app on the dashboard route, disconnected.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded configuration
    /// * `connector` - The wallet capability
    /// * `events` - Receiver the wallet adapter pushes changes into
    ///
    /// # Errors
    ///
    /// Returns a config error if validation fails or an address is malformed.
    pub fn new(config: AppConfig, connector: W, events: Receiver<WalletEvent>) -> AppResult<Self> {
        config.validate()?;
        let book = config.address_book()?;
        let session = WalletSession::new(connector, events)
            .with_allowed_chains(config.wallet.networks.clone());
        info!(
            app = %config.wallet.metadata.name,
            networks = config.wallet.networks.len(),
            "app initialized"
        );

        Ok(Self {
            config,
            book,
            session,
            route: Route::Dashboard,
            path: Route::Dashboard.path().to_string(),
            inventory: InventoryPage::default(),
            crafting: CraftingPage::default(),
            quest_log: QuestLogPage::default(),
            leaderboards: LeaderboardPage::default(),
        })
    }

    /// Loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Contract address book.
    #[must_use]
    pub const fn address_book(&self) -> &AddressBook {
        &self.book
    }

    /// The wallet session.
    #[must_use]
    pub const fn session(&self) -> &WalletSession<W> {
        &self.session
    }

    /// Read-only session handle for consumers outside the app.
    #[must_use]
    pub fn session_handle(&self) -> SessionHandle {
        self.session.handle()
    }

    /// Header button click while disconnected.
    ///
    /// # Errors
    ///
    /// Whatever the wallet reports; the session stays disconnected.
    pub async fn connect_wallet(&self) -> AppResult<SessionState> {
        Ok(self.session.connect().await?)
    }

    /// Header button click while connected.
    ///
    /// # Errors
    ///
    /// Whatever the wallet reports; the session is left as it was.
    pub fn disconnect_wallet(&self) -> AppResult<()> {
        Ok(self.session.disconnect()?)
    }

    /// Applies pending wallet events. Returns how many were applied.
    pub fn poll_wallet(&self) -> usize {
        self.session.sync()
    }

    /// Moves to `path` and returns the matched route.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::from_path(path);
        debug!(path, ?route, "navigate");
        self.route = route;
        self.path = path.to_string();
        route
    }

    /// Current route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Inventory UI state.
    pub fn inventory_mut(&mut self) -> &mut InventoryPage {
        &mut self.inventory
    }

    /// Crafting UI state.
    pub fn crafting_mut(&mut self) -> &mut CraftingPage {
        &mut self.crafting
    }

    /// Quest log UI state.
    pub fn quest_log_mut(&mut self) -> &mut QuestLogPage {
        &mut self.quest_log
    }

    /// Leaderboard UI state.
    pub fn leaderboards_mut(&mut self) -> &mut LeaderboardPage {
        &mut self.leaderboards
    }

    /// Chain contracts resolve against: the wallet's, else [`FALLBACK_CHAIN`].
    #[must_use]
    pub fn active_chain(&self) -> ChainId {
        self.session.state().chain_id().unwrap_or(FALLBACK_CHAIN)
    }

    /// Address of `contract` on [`Self::active_chain`]. Zero if undeployed.
    #[must_use]
    pub fn contract_address(&self, contract: ContractName) -> Address {
        self.book.resolve(self.active_chain(), contract)
    }

    /// Renders the current frame.
    #[must_use]
    pub fn render(&self) -> Screen {
        let page = match self.route {
            Route::Dashboard => PageView::Dashboard(DashboardView::new(&mock::CHARACTER)),
            Route::Inventory => PageView::Inventory(self.inventory.render(mock::INVENTORY)),
            Route::Crafting => PageView::Crafting(self.crafting.render(mock::RECIPES)),
            Route::QuestLog => PageView::QuestLog(self.quest_log.render(mock::QUESTS)),
            Route::Leaderboards => {
                PageView::Leaderboards(self.leaderboards.render(mock::leaderboard))
            }
            Route::NotFound => PageView::NotFound {
                path: self.path.clone(),
            },
        };

        Screen {
            header: Header::new(&self.session.state()),
            nav: navigation(self.route),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::InventoryTab;
    use alloy_primitives::address;
    use castquest_chain::session::event_channel;
    use castquest_chain::{WalletAccount, WalletError};

    const CONFIG: &str = r#"
        [wallet]
        networks = [8453, 84532]

        [contracts.base]
        QuestGear = "0x1111111111111111111111111111111111111111"

        [contracts.base_sepolia]
        QuestGear = "0x2222222222222222222222222222222222222222"
    "#;

    struct FixedWallet(Option<WalletAccount>);

    impl WalletConnector for FixedWallet {
        async fn open_connect_modal(&self) -> Result<Option<WalletAccount>, WalletError> {
            Ok(self.0)
        }

        fn disconnect(&self) -> Result<(), WalletError> {
            Ok(())
        }
    }

    fn app(account: Option<WalletAccount>) -> App<FixedWallet> {
        let (_tx, rx) = event_channel(4);
        App::new(AppConfig::from_toml_str(CONFIG).unwrap(), FixedWallet(account), rx).unwrap()
    }

    fn on_base() -> Option<WalletAccount> {
        Some(WalletAccount {
            address: address!("abcd000000000000000000000000000000001234"),
            chain_id: ChainId::BASE,
        })
    }

    #[test]
    fn test_starts_on_dashboard() {
        let app = app(None);
        let screen = app.render();
        assert_eq!(app.route(), Route::Dashboard);
        assert!(matches!(screen.page, PageView::Dashboard(_)));
        assert_eq!(screen.header.wallet.label, "Connect Wallet");
        assert!(screen.nav[0].active);
    }

    #[test]
    fn test_navigate_not_found_keeps_path() {
        let mut app = app(None);
        assert_eq!(app.navigate("/nowhere"), Route::NotFound);
        assert_eq!(
            app.render().page,
            PageView::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_page_state_survives_navigation() {
        let mut app = app(None);
        app.navigate("/inventory");
        app.inventory_mut().select(InventoryTab::Materials);
        app.navigate("/");
        app.navigate("/inventory");
        let PageView::Inventory(view) = app.render().page else {
            panic!("expected inventory");
        };
        assert_eq!(view.cards.len(), 3);
    }

    #[test]
    fn test_disconnected_resolves_on_fallback_chain() {
        let app = app(None);
        assert_eq!(app.active_chain(), FALLBACK_CHAIN);
        assert_eq!(
            app.contract_address(ContractName::QuestGear),
            address!("2222222222222222222222222222222222222222")
        );
        assert_eq!(app.contract_address(ContractName::GameManager), Address::ZERO);
    }

    #[tokio::test]
    async fn test_connected_resolves_on_wallet_chain() {
        let app = app(on_base());
        app.connect_wallet().await.unwrap();
        assert_eq!(app.active_chain(), ChainId::BASE);
        assert_eq!(
            app.contract_address(ContractName::QuestGear),
            address!("1111111111111111111111111111111111111111")
        );
        assert!(app.render().header.wallet.connected);
    }

    #[tokio::test]
    async fn test_connect_outside_configured_networks() {
        let app = app(Some(WalletAccount {
            address: Address::ZERO,
            chain_id: ChainId::OPTIMISM,
        }));
        let err = app.connect_wallet().await.unwrap_err();
        assert_eq!(
            err,
            crate::AppError::Wallet(WalletError::NetworkMismatch { chain_id: 10 })
        );
        assert!(!app.session_handle().is_connected());
    }

    #[test]
    fn test_session_limited_to_configured_networks() {
        let app = app(None);
        assert_eq!(app.config().wallet.networks, [ChainId::BASE, ChainId::BASE_SEPOLIA]);
        assert_eq!(app.session().allowed_chains(), app.config().wallet.networks.as_slice());
        assert_eq!(app.session().state(), SessionState::Disconnected);
        assert_eq!(
            app.address_book().resolve(ChainId::BASE, ContractName::QuestGear),
            address!("1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn test_rejects_empty_network_list() {
        let mut config = AppConfig::default();
        config.wallet.networks.clear();
        let (_tx, rx) = event_channel(1);
        assert!(App::new(config, FixedWallet(None), rx).is_err());
    }
}
