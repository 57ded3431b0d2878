//! # CastQuest Dashboard
//!
//! View layer for the CastQuest RPG: character dashboard, inventory,
//! crafting station, quest log and leaderboards.
//!
//! ## Design Principles
//!
//! 1. **Pages are pure** - every page is `data -> view model`; tab and
//!    filter selection is the only state, and it is never persisted
//! 2. **Explicit session** - the wallet session lives in [`App`] and pages
//!    read it through a [`castquest_chain::SessionHandle`]
//! 3. **Mock data** - game data comes from [`mock`] until live reads are
//!    wired in
//!
//! ## Example
//!
//! ```rust,ignore
//! let config = AppConfig::load("castquest.toml")?;
//! let mut app = App::new(config, wallet, wallet_events)?;
//!
//! app.connect_wallet().await?;
//! app.navigate("/inventory");
//! app.inventory_mut().select(InventoryTab::Equipment);
//! let screen = app.render();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod mock;
pub mod pages;
pub mod routes;

pub use app::{App, PageView, Screen};
pub use config::{AppConfig, AppMetadata, WalletConfig, WalletFeatures};
pub use error::{AppError, AppResult};
pub use layout::{Header, NavItem, WalletButton};
pub use routes::Route;
