//! # Dashboard Flow Integration Test
//!
//! A visitor lands, connects a wallet, browses pages, switches networks
//! from the wallet, and disconnects.

use alloy_primitives::address;
use castquest_app::pages::{InventoryTab, LeaderboardTab, QuestTab};
use castquest_app::{App, AppConfig, PageView, Route};
use castquest_chain::session::event_channel;
use castquest_chain::{
    ChainId, ContractName, WalletAccount, WalletConnector, WalletError, WalletEvent,
};

const CONFIG: &str = r#"
[wallet]
project_id = "test-project"
networks = [8453, 84532]

[contracts.base]
QuestGear = "0x00000000000000000000000000000000000000a1"
QuestMaterials = "0x00000000000000000000000000000000000000a2"
GameManager = "0x00000000000000000000000000000000000000a3"

[contracts.base_sepolia]
QuestGear = "0x00000000000000000000000000000000000000b1"
QuestMaterials = "0x00000000000000000000000000000000000000b2"
GameManager = "0x00000000000000000000000000000000000000b3"
"#;

struct TestWallet;

impl WalletConnector for TestWallet {
    async fn open_connect_modal(&self) -> Result<Option<WalletAccount>, WalletError> {
        Ok(Some(WalletAccount {
            address: address!("abcd000000000000000000000000000000001234"),
            chain_id: ChainId::BASE,
        }))
    }

    fn disconnect(&self) -> Result<(), WalletError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_visitor_session() {
    let config = AppConfig::from_toml_str(CONFIG).unwrap();
    assert!(config.wallet.has_project_id());
    let (wallet_tx, wallet_rx) = event_channel(8);
    let mut app = App::new(config, TestWallet, wallet_rx).unwrap();

    // landing
    let screen = app.render();
    assert_eq!(screen.header.brand, "CastQuest");
    assert_eq!(screen.header.wallet.label, "Connect Wallet");
    assert_eq!(
        app.contract_address(ContractName::GameManager),
        address!("00000000000000000000000000000000000000b3")
    );

    // connect
    app.connect_wallet().await.unwrap();
    let label = app.render().header.wallet.label;
    assert!(label.starts_with("0x") && label.contains("...") && label.ends_with("1234"));
    assert_eq!(
        app.contract_address(ContractName::GameManager),
        address!("00000000000000000000000000000000000000a3")
    );

    // browse
    assert_eq!(app.navigate("/quests"), Route::QuestLog);
    app.quest_log_mut().select(QuestTab::Completed);
    let screen = app.render();
    let active: Vec<_> = screen.nav.iter().filter(|n| n.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "Quest Log");
    let PageView::QuestLog(quests) = screen.page else {
        panic!("expected quest log");
    };
    assert_eq!(quests.cards.len(), 3);

    app.navigate("/leaderboards/");
    app.leaderboards_mut().select(LeaderboardTab::Weekly);
    let PageView::Leaderboards(board) = app.render().page else {
        panic!("expected leaderboards");
    };
    assert_eq!(board.rows[0].name, "@speedrunner");
    assert_eq!(board.rows[0].score, "15,000");

    app.navigate("/inventory?sort=rarity");
    app.inventory_mut().select(InventoryTab::Consumables);
    let PageView::Inventory(inventory) = app.render().page else {
        panic!("expected inventory");
    };
    assert_eq!(inventory.total_items, 10);
    assert_eq!(inventory.cards.len(), 2);

    app.navigate("/crafting");
    let ingredients = ["Goblin Ear x3", "Gold Coin", "Herb Bundle"];
    for (slot, ingredient) in ingredients.into_iter().enumerate() {
        app.crafting_mut().select_ingredient(slot, ingredient).unwrap();
    }
    let PageView::Crafting(crafting) = app.render().page else {
        panic!("expected crafting");
    };
    assert!(crafting.can_craft);

    // wallet switches to the test network
    wallet_tx.send(WalletEvent::ChainChanged(ChainId::BASE_SEPOLIA)).unwrap();
    assert_eq!(app.poll_wallet(), 1);
    assert_eq!(
        app.contract_address(ContractName::QuestGear),
        address!("00000000000000000000000000000000000000b1")
    );

    // disconnect
    app.disconnect_wallet().unwrap();
    assert_eq!(app.render().header.wallet.label, "Connect Wallet");
    assert_eq!(app.route(), Route::Crafting);
}

#[test]
fn test_unknown_route_highlights_nothing() {
    let (_tx, rx) = event_channel(1);
    let mut app = App::new(AppConfig::from_toml_str(CONFIG).unwrap(), TestWallet, rx).unwrap();
    app.navigate("/guilds");
    let screen = app.render();
    assert!(screen.nav.iter().all(|n| !n.active));
    assert!(matches!(screen.page, PageView::NotFound { ref path } if path == "/guilds"));
}
