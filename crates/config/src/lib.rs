//! # swapdesk-config
//!
//! Configuration for the swapdesk client.
//!
//! Values are layered with [`figment`], lowest precedence first:
//!
//! 1. the built-in [`Config::default`],
//! 2. the `[profile.<name>]` sections of `swapdesk.toml` (or the file named by `SWAPDESK_CONFIG`),
//! 3. `SWAPDESK_*` environment variables,
//! 4. whatever provider the caller merges on top, usually CLI options.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::Address;
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Serialized},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path, time::Duration};

mod error;
pub use error::{ConfigError, ExtractConfigError};

mod providers;
use providers::TomlFileProvider;

// reexport so cli types can implement `figment::Provider` to easily merge compiler arguments
pub use figment;

/// swapdesk configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The selected profile. **(dev only)**
    ///
    /// Set by `SWAPDESK_PROFILE`, never read from a file.
    #[serde(skip)]
    pub profile: Profile,
    /// JSON-RPC endpoint the wallet provider talks to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_rpc_url: Option<String>,
    /// Address of the swap router contract. There is no default deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_router: Option<Address>,
    /// Fixed-point decimals used for token amounts sent to and read from the router.
    pub token_decimals: u8,
    /// Tolerated drop between the displayed quote and the executed output, in basis points.
    pub slippage_bps: u16,
    /// Seconds to wait for a swap to be confirmed.
    pub transaction_timeout: u64,
    /// Number of confirmations a swap needs before it counts as settled.
    pub confirmations: u64,
    /// The account the wallet is expected to authorize, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Address>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Self::DEFAULT_PROFILE,
            eth_rpc_url: Some("http://localhost:8545".to_string()),
            swap_router: None,
            token_decimals: 18,
            slippage_bps: 50,
            transaction_timeout: 120,
            confirmations: 1,
            sender: None,
        }
    }
}

impl Config {
    /// The default profile: "default"
    pub const DEFAULT_PROFILE: Profile = Profile::Default;

    /// TOML section for profiles
    pub const PROFILE_SECTION: &'static str = "profile";

    /// File name of config toml file
    pub const FILE_NAME: &'static str = "swapdesk.toml";

    /// Environment variable prefix for config keys.
    pub const ENV_PREFIX: &'static str = "SWAPDESK_";

    /// 100% expressed in basis points.
    pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

    /// The largest exponent a `uint256` fixed-point value can carry.
    pub const MAX_DECIMALS: u8 = 77;

    /// Returns the current `Config`, read from the working directory.
    ///
    /// See [`figment`](Self::figment) for more details.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Returns the current `Config`, read from `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment_with_root(root))
    }

    /// Attempts to extract a `Config` from `provider`, returning the result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swapdesk_config::{
    ///     Config,
    ///     figment::providers::{Format, Toml},
    /// };
    ///
    /// // Use the default `Figment`, but allow values from `other.toml`
    /// // to supersede its values.
    /// let figment = Config::figment().merge(Toml::file("other.toml").nested());
    ///
    /// let config = Config::try_from(figment);
    /// ```
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config = figment.extract::<Self>().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        Ok(config)
    }

    /// Returns the default figment, rooted at the current working directory.
    pub fn figment() -> Figment {
        Self::figment_with_root(".")
    }

    /// Returns the default figment with `root/swapdesk.toml` as the config file.
    ///
    /// A relative `root` is resolved against the working directory. Parent directories are
    /// never searched for the file.
    ///
    /// Environment variables are merged globally, so they win over every file profile.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let profile = Self::selected_profile();
        Figment::from(Self::default())
            .merge(TomlFileProvider::new(
                Some("SWAPDESK_CONFIG"),
                root.as_ref().join(Self::FILE_NAME),
            ))
            .merge(
                Env::prefixed(Self::ENV_PREFIX)
                    .ignore(&["PROFILE", "CONFIG", "PRIVATE_KEY"])
                    .global(),
            )
            .select(profile)
    }

    /// Returns the selected profile.
    ///
    /// If the `SWAPDESK_PROFILE` env variable is not set, this returns the `DEFAULT_PROFILE`.
    pub fn selected_profile() -> Profile {
        Profile::from_env_or("SWAPDESK_PROFILE", Self::DEFAULT_PROFILE)
    }

    /// Checks the values that figment cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slippage_bps > Self::MAX_SLIPPAGE_BPS {
            return Err(ConfigError::InvalidSlippage(self.slippage_bps));
        }
        if self.token_decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.token_decimals));
        }
        Ok(())
    }

    /// Returns the configured swap router.
    pub fn router(&self) -> Result<Address, ConfigError> {
        self.swap_router.ok_or(ConfigError::MissingRouter)
    }

    /// Returns the configured RPC endpoint.
    pub fn rpc_url(&self) -> Result<&str, ConfigError> {
        self.eth_rpc_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingRpcUrl)
    }

    /// How long to wait for a swap confirmation.
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.transaction_timeout)
    }

    /// Serializes the config to a TOML string under its `[profile.<name>]` section.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        let profile = BTreeMap::from([(self.profile.to_string(), self)]);
        let doc = BTreeMap::from([(Self::PROFILE_SECTION, profile)]);
        toml::to_string_pretty(&doc)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("swapdesk Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
