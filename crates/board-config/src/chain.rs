use alloy_chains::NamedChain;
use alloy_primitives::ChainId;
use serde::{Deserialize, Serialize};

/// The chain every contract call must be made on.
///
/// Besides the identifier this carries everything a wallet needs to register the chain when it
/// does not know it yet (`wallet_addEthereumChain`).
///
/// Only `chain_id` is needed in `[chain]`: the other keys default to what is known about that
/// chain. Sepolia is fully known. Other chains named by `alloy-chains` get their names and block
/// explorer but need `rpc_urls`, and any other chain also needs `display_name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ChainTable", try_from = "ChainTable")]
pub struct ChainConfig {
    /// EIP-155 chain id.
    pub chain_id: ChainId,
    /// Name sent to the wallet when the chain has to be added.
    pub chain_name: String,
    /// Label shown in the network banner.
    pub display_name: String,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
    pub native_currency: NativeCurrency,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::sepolia()
    }
}

impl ChainConfig {
    /// The Sepolia test network.
    pub fn sepolia() -> Self {
        Self {
            chain_id: NamedChain::Sepolia as ChainId,
            chain_name: "Sepolia Test Network".to_string(),
            display_name: "Sepolia Testnet".to_string(),
            rpc_urls: vec!["https://rpc.sepolia.org".to_string()],
            block_explorer_urls: vec!["https://sepolia.etherscan.io".to_string()],
            native_currency: NativeCurrency::default(),
        }
    }

    /// Returns the chain id as the `0x`-prefixed quantity wallets report.
    pub fn hex_id(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    /// Everything known about `chain_id` without configuration.
    fn known(chain_id: ChainId) -> ChainTable {
        if chain_id == NamedChain::Sepolia as ChainId {
            return ChainTable::full(Self::sepolia());
        }
        let Ok(chain) = NamedChain::try_from(chain_id) else {
            return ChainTable { chain_id: Some(chain_id), ..Default::default() };
        };
        let name = known_chain_name(chain);
        ChainTable {
            chain_id: Some(chain_id),
            chain_name: Some(name.clone()),
            display_name: Some(name),
            rpc_urls: None,
            block_explorer_urls: chain.etherscan_urls().map(|(_, url)| vec![url.to_string()]),
            native_currency: None,
        }
    }
}

/// Human readable name of a chain known to `alloy-chains`, e.g. `Arbitrum Sepolia`.
fn known_chain_name(chain: NamedChain) -> String {
    if chain == NamedChain::Mainnet {
        return "Ethereum Mainnet".to_string();
    }
    chain
        .to_string()
        .split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default()
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `[chain]` as written in the config: every key optional.
///
/// Serializing a [`ChainConfig`] only writes the keys that differ from what is known about its
/// chain, so that a later source setting just `chain_id` does not inherit another chain's names
/// and URLs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct ChainTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_id: Option<ChainId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rpc_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_explorer_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    native_currency: Option<NativeCurrency>,
}

impl ChainTable {
    fn full(chain: ChainConfig) -> Self {
        Self {
            chain_id: Some(chain.chain_id),
            chain_name: Some(chain.chain_name),
            display_name: Some(chain.display_name),
            rpc_urls: Some(chain.rpc_urls),
            block_explorer_urls: Some(chain.block_explorer_urls),
            native_currency: Some(chain.native_currency),
        }
    }
}

impl From<ChainConfig> for ChainTable {
    fn from(chain: ChainConfig) -> Self {
        let known = ChainConfig::known(chain.chain_id);
        fn changed<T: PartialEq>(value: T, known: Option<T>) -> Option<T> {
            (known.as_ref() != Some(&value)).then_some(value)
        }
        Self {
            chain_id: Some(chain.chain_id),
            chain_name: changed(chain.chain_name, known.chain_name),
            display_name: changed(chain.display_name, known.display_name),
            rpc_urls: changed(chain.rpc_urls, known.rpc_urls),
            block_explorer_urls: changed(chain.block_explorer_urls, known.block_explorer_urls),
            native_currency: changed(
                chain.native_currency,
                Some(known.native_currency.unwrap_or_default()),
            ),
        }
    }
}

impl TryFrom<ChainTable> for ChainConfig {
    type Error = String;

    fn try_from(table: ChainTable) -> Result<Self, Self::Error> {
        let chain_id = table.chain_id.unwrap_or(NamedChain::Sepolia as ChainId);
        let known = Self::known(chain_id);

        let display_name = table.display_name.or(known.display_name);
        let chain_name = table.chain_name.or(known.chain_name).or_else(|| display_name.clone());
        let rpc_urls = table.rpc_urls.or(known.rpc_urls).filter(|urls| !urls.is_empty());

        let missing = [
            ("display_name", display_name.is_none()),
            ("rpc_urls", rpc_urls.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, missing)| missing.then_some(key))
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(format!(
                "chain {chain_id} needs {} to be set",
                missing.iter().map(|key| format!("`{key}`")).collect::<Vec<_>>().join(" and ")
            ));
        }

        Ok(Self {
            chain_id,
            chain_name: chain_name.unwrap_or_default(),
            display_name: display_name.unwrap_or_default(),
            rpc_urls: rpc_urls.unwrap_or_default(),
            block_explorer_urls: table
                .block_explorer_urls
                .or(known.block_explorer_urls)
                .unwrap_or_default(),
            native_currency: table.native_currency.or(known.native_currency).unwrap_or_default(),
        })
    }
}

/// Native currency descriptor of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self { name: "ETH".to_string(), symbol: "ETH".to_string(), decimals: 18 }
    }
}
