use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use msgboard_config::{
    Config, ExtractConfigError,
    figment::{
        self, Metadata, Profile,
        value::{Dict, Map},
    },
};
use std::path::PathBuf;

const VERSION_MESSAGE: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARGO_PKG_NAME"), ")");

/// Read and write the message stored in the message board contract.
#[derive(Debug, Parser)]
#[command(name = "msgboard", version = VERSION_MESSAGE, next_display_order = None)]
pub struct BoardArgs {
    #[command(flatten)]
    pub opts: BoardOpts,

    #[command(subcommand)]
    pub cmd: BoardSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum BoardSubcommand {
    /// Read the stored message.
    #[command(visible_alias = "g")]
    Get,

    /// Store a new message and wait until the transaction is mined.
    #[command(visible_alias = "s")]
    Set {
        /// The message to store.
        message: String,
    },

    /// Show the network the wallet is on.
    #[command(visible_alias = "n")]
    Network,

    /// Ask the wallet to switch to the target network, adding the network first if needed.
    SwitchNetwork,

    /// Start a session: type a message, then `:set` to store it.
    ///
    /// Commands: `:get`, `:set`, `:network`, `:switch`, `:quit`.
    #[command(visible_alias = "i")]
    Interactive,
}

/// Options shared by all commands. Set values override `msgboard.toml` and `MSGBOARD_*`.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Board options")]
pub struct BoardOpts {
    /// JSON-RPC endpoint of the wallet.
    ///
    /// A wallet bridge or a dev node with unlocked accounts. `localhost:<port>` is accepted.
    #[arg(long, global = true, value_name = "URL")]
    pub wallet_url: Option<String>,

    /// Address of the message board contract.
    #[arg(long, global = true, value_name = "ADDRESS")]
    pub contract: Option<Address>,

    /// Switch the wallet to the target network when it is on another one.
    #[arg(long, global = true)]
    pub auto_switch: bool,

    /// Path to the config file, instead of `msgboard.toml`.
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the board state as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

impl figment::Provider for BoardOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("BoardOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}

impl BoardOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(url) = &self.wallet_url {
            dict.insert("wallet_url".into(), url.clone().into());
        }
        if let Some(contract) = self.contract {
            dict.insert("contract".into(), contract.to_string().into());
        }
        if self.auto_switch {
            dict.insert("auto_switch".into(), true.into());
        }
        dict
    }

    /// Loads the config with these options merged on top.
    pub fn load_config(&self) -> Result<Config, ExtractConfigError> {
        Config::try_from(Config::figment_with_file(self.config.clone()).merge(self.clone()))
    }
}
