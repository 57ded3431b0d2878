//! # Application Configuration
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! [wallet]
//! project_id = "..."
//! networks = [8453, 10, 84532, 11155420]
//!
//! [wallet.metadata]
//! name = "CastQuest"
//!
//! [contracts.base]
//! GameManager = "0x..."
//! ```
//!
//! Every section is optional; omitted values fall back to the shipped
//! defaults. `CASTQUEST_PROJECT_ID` overrides `wallet.project_id`.

use std::path::Path;

use castquest_chain::{AddressBook, AddressBookConfig, ChainId, SUPPORTED_NETWORKS};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Environment variable overriding the wallet project id.
pub const PROJECT_ID_ENV: &str = "CASTQUEST_PROJECT_ID";

/// Project id shipped in the default config. Wallet modals refuse it.
pub const PLACEHOLDER_PROJECT_ID: &str = "YOUR_PROJECT_ID_HERE";

/// Metadata shown by the wallet modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppMetadata {
    /// App name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Public URL.
    pub url: String,
    /// Icon URLs.
    pub icons: Vec<String>,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "CastQuest".to_string(),
            description: "A persistent, social RPG powered by Farcaster".to_string(),
            url: "https://castquest.xyz".to_string(),
            icons: vec!["https://castquest.xyz/icon.png".to_string()],
        }
    }
}

/// Optional wallet modal features.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletFeatures {
    /// Modal usage analytics.
    pub analytics: bool,
    /// Email login.
    pub email: bool,
    /// Social login providers.
    pub socials: Vec<String>,
}

impl Default for WalletFeatures {
    fn default() -> Self {
        Self {
            analytics: true,
            email: false,
            socials: Vec::new(),
        }
    }
}

/// Wallet connection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletConfig {
    /// Wallet-connect project id.
    pub project_id: String,
    /// Modal metadata.
    pub metadata: AppMetadata,
    /// Chains the wallet may connect on.
    pub networks: Vec<ChainId>,
    /// Modal features.
    pub features: WalletFeatures,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            project_id: PLACEHOLDER_PROJECT_ID.to_string(),
            metadata: AppMetadata::default(),
            networks: SUPPORTED_NETWORKS.iter().map(|n| n.chain_id).collect(),
            features: WalletFeatures::default(),
        }
    }
}

impl WalletConfig {
    /// Whether a real project id has been configured.
    #[must_use]
    pub fn has_project_id(&self) -> bool {
        let id = self.project_id.trim();
        !id.is_empty() && id != PLACEHOLDER_PROJECT_ID
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Wallet settings.
    pub wallet: WalletConfig,
    /// Contract address tables.
    pub contracts: AddressBookConfig,
}

impl AppConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] on malformed TOML or an empty network list.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file cannot be read, or any error
    /// from [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| AppError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?.with_env_overrides();
        info!(path = %path.display(), networks = config.wallet.networks.len(), "config loaded");
        Ok(config)
    }

    /// Applies `CASTQUEST_PROJECT_ID` if set.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_project_id(std::env::var(PROJECT_ID_ENV).ok())
    }

    /// Replaces the project id when `id` is present and non-blank.
    #[must_use]
    pub fn with_project_id(mut self, id: Option<String>) -> Self {
        if let Some(id) = id.filter(|id| !id.trim().is_empty()) {
            self.wallet.project_id = id;
        }
        if !self.wallet.has_project_id() {
            warn!("{PROJECT_ID_ENV} is not set, wallet modal will not open");
        }
        self
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if no networks are configured.
    pub fn validate(&self) -> AppResult<()> {
        if self.wallet.networks.is_empty() {
            return Err(AppError::Config(
                "wallet.networks must list at least one chain".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the immutable contract address book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Chain`] on an invalid address.
    pub fn address_book(&self) -> AppResult<AddressBook> {
        Ok(self.contracts.build()?)
    }
}
