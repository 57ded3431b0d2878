//! Page chrome: header with the wallet button, and the navigation bar.

use castquest_chain::SessionState;

use crate::format::short_address;
use crate::routes::Route;

/// Brand shown in the header.
pub const BRAND: &str = "CastQuest";

/// Label of the wallet button while disconnected.
pub const CONNECT_LABEL: &str = "Connect Wallet";

/// The header's wallet button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletButton {
    /// `Connect Wallet`, or the truncated address.
    pub label: String,
    /// Whether clicking disconnects (true) or opens the modal (false).
    pub connected: bool,
}

impl WalletButton {
    /// Button for the given session state.
    #[must_use]
    pub fn for_state(state: &SessionState) -> Self {
        match state.address() {
            Some(address) => Self {
                label: short_address(&address),
                connected: true,
            },
            None => Self {
                label: CONNECT_LABEL.to_string(),
                connected: false,
            },
        }
    }
}

/// Sticky page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Brand text.
    pub brand: &'static str,
    /// Wallet button.
    pub wallet: WalletButton,
}

impl Header {
    /// Header for the given session state.
    #[must_use]
    pub fn new(state: &SessionState) -> Self {
        Self {
            brand: BRAND,
            wallet: WalletButton::for_state(state),
        }
    }
}

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Target route.
    pub route: Route,
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub path: &'static str,
    /// Highlighted when it is the current route.
    pub active: bool,
}

/// Navigation bar with exactly the current route highlighted.
///
/// On the not-found page nothing is highlighted.
#[must_use]
pub fn navigation(current: Route) -> Vec<NavItem> {
    Route::NAV
        .into_iter()
        .map(|route| NavItem {
            route,
            label: route.label(),
            path: route.path(),
            active: route == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use castquest_chain::{ChainId, WalletAccount};

    #[test]
    fn test_disconnected_header() {
        let header = Header::new(&SessionState::Disconnected);
        assert_eq!(header.brand, "CastQuest");
        assert_eq!(header.wallet.label, "Connect Wallet");
        assert!(!header.wallet.connected);
    }

    #[test]
    fn test_connected_header_truncates() {
        let state = SessionState::Connected(WalletAccount {
            address: address!("abcd000000000000000000000000000000001234"),
            chain_id: ChainId::BASE,
        });
        let header = Header::new(&state);
        assert!(header.wallet.connected);
        assert_eq!(header.wallet.label.len(), 13);
        assert!(header.wallet.label.ends_with("...1234"));
    }

    #[test]
    fn test_single_active_nav_item() {
        for current in Route::NAV {
            let nav = navigation(current);
            assert_eq!(nav.len(), 5);
            let active: Vec<_> = nav.iter().filter(|item| item.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].route, current);
        }
        assert!(navigation(Route::NotFound).iter().all(|item| !item.active));
    }
}
