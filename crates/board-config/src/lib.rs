//! # msgboard-config
//!
//! Configuration of the message board client: which wallet endpoint to talk to, which contract
//! holds the message, and which chain it lives on.
//!
//! Values are merged, lowest precedence first, from the built-in defaults, `msgboard.toml`, the
//! `MSGBOARD_*` environment and any additional [`Provider`] such as the CLI arguments.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, address};
use figment::{
    Figment, Provider,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{path::PathBuf, time::Duration};

mod chain;
pub use chain::{ChainConfig, NativeCurrency};

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG};

mod providers;
use providers::TomlFileProvider;

pub use figment;

/// msgboard configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON-RPC endpoint of the wallet provider.
    ///
    /// `None` means no wallet is available; every operation then fails with a provider-missing
    /// error.
    pub wallet_url: Option<String>,
    /// Whether the wallet identifies as MetaMask, the only supported provider type.
    pub is_metamask: bool,
    /// Address of the deployed message board contract.
    pub contract: Address,
    /// Switch the wallet to [`Config::chain`] automatically when a read or write finds it on
    /// another network.
    pub auto_switch: bool,
    /// How often to poll for a receipt while waiting for a write to confirm. Must not be zero.
    #[serde(deserialize_with = "deserialize_poll_interval")]
    pub poll_interval_ms: u64,
    /// The chain the contract is deployed on.
    pub chain: ChainConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_url: None,
            is_metamask: true,
            contract: Self::DEFAULT_CONTRACT,
            auto_switch: false,
            poll_interval_ms: 1_000,
            chain: ChainConfig::default(),
        }
    }
}

impl Config {
    /// The default config file name.
    pub const FILE_NAME: &'static str = "msgboard.toml";

    /// Environment variable pointing to an alternative config file.
    pub const CONFIG_ENV_VAR: &'static str = "MSGBOARD_CONFIG";

    /// Prefix of all environment variables read into the config.
    pub const ENV_PREFIX: &'static str = "MSGBOARD_";

    /// The message board deployment on Sepolia.
    pub const DEFAULT_CONTRACT: Address = address!("8bb9d856cca8cb916ce11e51eb30971b0d7c1446");

    /// Loads the config from the default figment.
    ///
    /// See [`figment`](Self::figment) for the merge order.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Attempts to extract a `Config` from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract::<Self>().map_err(ExtractConfigError::new)
    }

    /// Returns the default figment: defaults, `msgboard.toml` (or the file named by
    /// `MSGBOARD_CONFIG`), then the `MSGBOARD_*` environment.
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    /// Like [`figment`](Self::figment) but reads `file` instead of the default config file.
    ///
    /// Nested keys are separated by a double underscore in the environment, e.g.
    /// `MSGBOARD_CHAIN__CHAIN_ID=1`.
    pub fn figment_with_file(file: Option<PathBuf>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(
                TomlFileProvider::new(Some(Self::CONFIG_ENV_VAR), Self::FILE_NAME)
                    .with_explicit(file),
            )
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["CONFIG"]).split("__"))
    }

    /// Receipt polling interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn deserialize_poll_interval<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u64::deserialize(deserializer)?;
    if ms == 0 {
        return Err(serde::de::Error::custom("poll interval must be at least 1 ms"));
    }
    Ok(ms)
}
