//! # Wallet Session
//!
//! Two-state connection tracker wrapped around an external wallet.
//!
//! ```text
//!                connect() ok
//! ┌──────────────┐ ─────────────▶ ┌──────────────────────┐
//! │ Disconnected │                │ Connected(account)   │
//! └──────────────┘ ◀───────────── └──────────────────────┘
//!      ▲      disconnect() / WalletEvent::Disconnected
//!      └── abandoned modal, rejection, unsupported chain: no transition
//! ```
//!
//! The session is the single writer. Pages read through cheap
//! [`SessionHandle`] clones. Wallet-originated changes (account switch,
//! chain switch, lock) arrive over a channel and are applied by [`WalletSession::sync`].

use std::future::Future;
use std::sync::Arc;

use alloy_primitives::Address;
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::WalletError;
use crate::network::{ChainId, SUPPORTED_NETWORKS};

/// A connected wallet account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WalletAccount {
    /// Connected address.
    pub address: Address,
    /// Chain the wallet is on.
    pub chain_id: ChainId,
}

/// Connection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No wallet connected.
    #[default]
    Disconnected,
    /// Wallet connected.
    Connected(WalletAccount),
}

impl SessionState {
    /// Connected address, if any.
    #[inline]
    #[must_use]
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::Connected(account) => Some(account.address),
            Self::Disconnected => None,
        }
    }

    /// Connected chain, if any.
    #[inline]
    #[must_use]
    pub const fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Connected(account) => Some(account.chain_id),
            Self::Disconnected => None,
        }
    }

    /// Whether a wallet is connected.
    #[inline]
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

/// Changes reported by the wallet itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    /// The user switched accounts.
    AccountChanged(Address),
    /// The user switched networks.
    ChainChanged(ChainId),
    /// The wallet locked or dropped the connection.
    Disconnected,
}

/// External wallet capability (modal, provider, injected wallet...).
pub trait WalletConnector {
    /// Opens the wallet selection flow.
    ///
    /// Resolves to `Ok(None)` when the user closes the flow without
    /// choosing an account.
    fn open_connect_modal(
        &self,
    ) -> impl Future<Output = Result<Option<WalletAccount>, WalletError>> + Send;

    /// Tells the wallet to drop the connection.
    ///
    /// # Errors
    ///
    /// Whatever the wallet reports.
    fn disconnect(&self) -> Result<(), WalletError>;
}

/// Creates the channel a wallet adapter uses to push [`WalletEvent`]s.
#[must_use]
pub fn event_channel(capacity: usize) -> (Sender<WalletEvent>, Receiver<WalletEvent>) {
    bounded(capacity)
}

/// Read-only view of the session, handed to pages.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// Connected address, if any.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        self.state().address()
    }

    /// Connected chain, if any.
    #[must_use]
    pub fn chain_id(&self) -> Option<ChainId> {
        self.state().chain_id()
    }

    /// Whether a wallet is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }
}

/// The wallet session provider.
pub struct WalletSession<W> {
    connector: W,
    state: Arc<RwLock<SessionState>>,
    events: Receiver<WalletEvent>,
    allowed_chains: Vec<ChainId>,
}

impl<W: WalletConnector> WalletSession<W> {
    /// Creates a disconnected session accepting every supported network.
    ///
    /// # Arguments
    ///
    /// * `connector` - The external wallet capability
    /// * `events` - Receiver for wallet-originated changes
    #[must_use]
    pub fn new(connector: W, events: Receiver<WalletEvent>) -> Self {
        Self {
            connector,
            state: Arc::new(RwLock::new(SessionState::Disconnected)),
            events,
            allowed_chains: SUPPORTED_NETWORKS.iter().map(|n| n.chain_id).collect(),
        }
    }

    /// Restricts connections to `chains`.
    #[must_use]
    pub fn with_allowed_chains(mut self, chains: Vec<ChainId>) -> Self {
        self.allowed_chains = chains;
        self
    }

    /// Returns a read-only handle for consumers.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// The wrapped wallet capability.
    #[must_use]
    pub const fn connector(&self) -> &W {
        &self.connector
    }

    /// Chains a connection may be made on.
    #[must_use]
    pub fn allowed_chains(&self) -> &[ChainId] {
        &self.allowed_chains
    }

    /// Opens the wallet flow and connects on success.
    ///
    /// Already connected sessions return immediately without opening the
    /// flow. An abandoned flow returns `Ok(SessionState::Disconnected)`.
    ///
    /// # Errors
    ///
    /// Wallet errors are passed through unchanged. A wallet on a chain
    /// outside the allowed list is told to disconnect and yields
    /// [`WalletError::NetworkMismatch`]. In every error case the session
    /// stays disconnected.
    pub async fn connect(&self) -> Result<SessionState, WalletError> {
        let current = self.state();
        if current.is_connected() {
            return Ok(current);
        }

        // events from an earlier connection must not touch the new one
        self.discard_pending();

        match self.connector.open_connect_modal().await {
            Ok(Some(account)) => {
                if !self.allowed_chains.contains(&account.chain_id) {
                    warn!(chain_id = %account.chain_id, "wallet on unsupported chain");
                    if let Err(e) = self.connector.disconnect() {
                        warn!(error = %e, "wallet refused to drop rejected connection");
                    }
                    self.discard_pending();
                    return Err(WalletError::NetworkMismatch {
                        chain_id: account.chain_id.get(),
                    });
                }
                let next = SessionState::Connected(account);
                *self.state.write() = next;
                info!(address = %account.address, chain_id = %account.chain_id, "wallet connected");
                Ok(next)
            }
            Ok(None) => {
                debug!("wallet flow closed without a selection");
                Ok(SessionState::Disconnected)
            }
            Err(e) => {
                warn!(error = %e, "wallet connection failed");
                Err(e)
            }
        }
    }

    /// Disconnects and forgets the address.
    ///
    /// # Errors
    ///
    /// Returns the wallet's error; the session is left as it was.
    pub fn disconnect(&self) -> Result<(), WalletError> {
        if !self.state().is_connected() {
            return Ok(());
        }
        self.connector.disconnect()?;
        *self.state.write() = SessionState::Disconnected;
        self.discard_pending();
        info!("wallet disconnected");
        Ok(())
    }

    /// Drops queued events without applying them.
    fn discard_pending(&self) {
        let dropped = self.events.try_iter().count();
        if dropped > 0 {
            debug!(dropped, "discarded stale wallet events");
        }
    }

    /// Applies every pending wallet event. Returns how many were applied.
    pub fn sync(&self) -> usize {
        let mut applied = 0;
        for event in self.events.try_iter() {
            let mut state = self.state.write();
            match (event, *state) {
                (WalletEvent::Disconnected, SessionState::Connected(_)) => {
                    *state = SessionState::Disconnected;
                    info!("wallet dropped the connection");
                }
                (WalletEvent::AccountChanged(address), SessionState::Connected(account)) => {
                    *state = SessionState::Connected(WalletAccount { address, ..account });
                    info!(%address, "wallet account switched");
                }
                (WalletEvent::ChainChanged(chain_id), SessionState::Connected(account)) => {
                    *state = SessionState::Connected(WalletAccount { chain_id, ..account });
                    info!(%chain_id, "wallet chain switched");
                }
                (event, SessionState::Disconnected) => {
                    debug!(?event, "ignoring wallet event while disconnected");
                    continue;
                }
            }
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ALICE: Address = address!("abcd000000000000000000000000000000001234");
    const BOB: Address = address!("b0b0000000000000000000000000000000000b0b");

    type Outcome = Result<Option<WalletAccount>, WalletError>;

    /// Plays back queued modal outcomes.
    struct ScriptedWallet {
        outcomes: Mutex<VecDeque<Outcome>>,
        disconnect_error: Option<WalletError>,
        disconnects: AtomicUsize,
    }

    impl ScriptedWallet {
        fn with(outcomes: Vec<Outcome>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                disconnect_error: None,
                disconnects: AtomicUsize::new(0),
            }
        }
    }

    impl WalletConnector for ScriptedWallet {
        async fn open_connect_modal(&self) -> Outcome {
            self.outcomes.lock().pop_front().unwrap_or(Ok(None))
        }

        fn disconnect(&self) -> Result<(), WalletError> {
            self.disconnects.fetch_add(1, Ordering::SeqCst);
            self.disconnect_error.clone().map_or(Ok(()), Err)
        }
    }

    fn alice_on(chain_id: ChainId) -> WalletAccount {
        WalletAccount {
            address: ALICE,
            chain_id,
        }
    }

    fn session(outcomes: Vec<Outcome>) -> (WalletSession<ScriptedWallet>, Sender<WalletEvent>) {
        let (tx, rx) = event_channel(16);
        (WalletSession::new(ScriptedWallet::with(outcomes), rx), tx)
    }

    #[tokio::test]
    async fn test_connect_then_disconnect() {
        let (session, _tx) = session(vec![Ok(Some(alice_on(ChainId::BASE)))]);
        let handle = session.handle();
        assert_eq!(handle.state(), SessionState::Disconnected);

        let state = session.connect().await.unwrap();
        assert_eq!(state, SessionState::Connected(alice_on(ChainId::BASE)));
        assert_eq!(handle.address(), Some(ALICE));
        assert_eq!(handle.chain_id(), Some(ChainId::BASE));

        session.disconnect().unwrap();
        assert_eq!(handle.state(), SessionState::Disconnected);
        assert_eq!(handle.address(), None);
    }

    #[tokio::test]
    async fn test_abandoned_flow_stays_disconnected() {
        let (session, _tx) = session(vec![Ok(None)]);
        assert_eq!(session.connect().await, Ok(SessionState::Disconnected));
        assert!(!session.handle().is_connected());
    }

    #[tokio::test]
    async fn test_rejection_then_retry() {
        let (session, _tx) = session(vec![
            Err(WalletError::Rejected),
            Ok(Some(alice_on(ChainId::BASE_SEPOLIA))),
        ]);
        assert_eq!(session.connect().await, Err(WalletError::Rejected));
        assert_eq!(session.state(), SessionState::Disconnected);

        assert!(session.connect().await.unwrap().is_connected());
    }

    #[tokio::test]
    async fn test_unsupported_chain_rejected() {
        let (session, _tx) = session(vec![Ok(Some(alice_on(ChainId(1))))]);
        assert_eq!(
            session.connect().await,
            Err(WalletError::NetworkMismatch { chain_id: 1 })
        );
        assert_eq!(session.state(), SessionState::Disconnected);
        // the wallet-side connection is dropped too
        assert_eq!(session.connector().disconnects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_events_do_not_reach_next_connection() {
        let (session, tx) = session(vec![
            Ok(Some(alice_on(ChainId::BASE))),
            Ok(Some(alice_on(ChainId::BASE))),
        ]);
        session.connect().await.unwrap();

        // wallet locks, user disconnects before the event is synced
        tx.send(WalletEvent::Disconnected).unwrap();
        session.disconnect().unwrap();
        session.connect().await.unwrap();

        assert_eq!(session.sync(), 0);
        assert!(session.state().is_connected());
    }

    #[tokio::test]
    async fn test_events_queued_while_disconnected_dropped_on_connect() {
        let (session, tx) = session(vec![Ok(Some(alice_on(ChainId::BASE)))]);
        tx.send(WalletEvent::ChainChanged(ChainId::OPTIMISM)).unwrap();
        session.connect().await.unwrap();

        assert_eq!(session.sync(), 0);
        assert_eq!(session.handle().chain_id(), Some(ChainId::BASE));
    }

    #[tokio::test]
    async fn test_connect_when_connected_skips_modal() {
        let (session, _tx) = session(vec![
            Ok(Some(alice_on(ChainId::BASE))),
            Err(WalletError::NoWallet),
        ]);
        session.connect().await.unwrap();
        // second outcome would be an error if the modal were opened again
        assert!(session.connect().await.unwrap().is_connected());
        assert_eq!(session.connector().outcomes.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_wallet_events_applied() {
        let (session, tx) = session(vec![Ok(Some(alice_on(ChainId::BASE)))]);
        session.connect().await.unwrap();

        tx.send(WalletEvent::AccountChanged(BOB)).unwrap();
        tx.send(WalletEvent::ChainChanged(ChainId::OPTIMISM)).unwrap();
        assert_eq!(session.sync(), 2);
        assert_eq!(
            session.state(),
            SessionState::Connected(WalletAccount {
                address: BOB,
                chain_id: ChainId::OPTIMISM,
            })
        );

        tx.send(WalletEvent::Disconnected).unwrap();
        assert_eq!(session.sync(), 1);
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_events_ignored_while_disconnected() {
        let (session, tx) = session(Vec::new());
        tx.send(WalletEvent::AccountChanged(BOB)).unwrap();
        tx.send(WalletEvent::Disconnected).unwrap();
        assert_eq!(session.sync(), 0);
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_failed_disconnect_keeps_state() {
        let (tx, rx) = event_channel(4);
        drop(tx);
        let wallet = ScriptedWallet {
            outcomes: Mutex::new(vec![Ok(Some(alice_on(ChainId::BASE)))].into()),
            disconnect_error: Some(WalletError::Provider("locked".to_string())),
            disconnects: AtomicUsize::new(0),
        };
        let session = WalletSession::new(wallet, rx);
        session.connect().await.unwrap();

        assert!(session.disconnect().is_err());
        assert_eq!(session.handle().address(), Some(ALICE));
    }
}
