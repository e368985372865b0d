use alloy_primitives::{ChainId, TxHash, U64};
use alloy_rpc_types_eth::TransactionRequest;
use msgboard_config::{ChainConfig, NativeCurrency};
use serde::{Deserialize, Serialize};

/// Standard EIP-1193 requests issued by msgboard.
/// Reference: <https://eips.ethereum.org/EIPS/eip-1193>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum EthereumRequest {
    #[serde(rename = "eth_requestAccounts")]
    RequestAccounts,

    #[serde(rename = "eth_accounts")]
    Accounts,

    #[serde(rename = "eth_chainId")]
    ChainId,

    #[serde(rename = "wallet_switchEthereumChain")]
    SwitchEthereumChain([SwitchEthereumChainParameter; 1]),

    #[serde(rename = "wallet_addEthereumChain")]
    AddEthereumChain([AddEthereumChainParameter; 1]),

    #[serde(rename = "eth_call")]
    Call(TransactionRequest, String),

    #[serde(rename = "eth_sendTransaction")]
    SendTransaction([TransactionRequest; 1]),

    #[serde(rename = "eth_getTransactionReceipt")]
    GetTransactionReceipt([TxHash; 1]),
}

impl EthereumRequest {
    /// `wallet_switchEthereumChain` to `chain_id`.
    pub fn switch_chain(chain_id: ChainId) -> Self {
        Self::SwitchEthereumChain([SwitchEthereumChainParameter { chain_id: U64::from(chain_id) }])
    }

    /// `eth_call` against the latest block.
    pub fn call(tx: TransactionRequest) -> Self {
        Self::Call(tx, "latest".to_string())
    }

    /// The JSON-RPC method name.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::RequestAccounts => "eth_requestAccounts",
            Self::Accounts => "eth_accounts",
            Self::ChainId => "eth_chainId",
            Self::SwitchEthereumChain(_) => "wallet_switchEthereumChain",
            Self::AddEthereumChain(_) => "wallet_addEthereumChain",
            Self::Call(..) => "eth_call",
            Self::SendTransaction(_) => "eth_sendTransaction",
            Self::GetTransactionReceipt(_) => "eth_getTransactionReceipt",
        }
    }

    /// The positional parameters, `[]` for methods that take none.
    pub fn params(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut value| value.get_mut("params").map(serde_json::Value::take))
            .unwrap_or_else(|| serde_json::Value::Array(vec![]))
    }
}

/// Parameter of `wallet_switchEthereumChain`, see
/// [EIP-3326](https://eips.ethereum.org/EIPS/eip-3326).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchEthereumChainParameter {
    pub chain_id: U64,
}

/// Parameter of `wallet_addEthereumChain`, see
/// [EIP-3085](https://eips.ethereum.org/EIPS/eip-3085).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    pub chain_id: U64,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_explorer_urls: Vec<String>,
}

impl From<&ChainConfig> for AddEthereumChainParameter {
    fn from(chain: &ChainConfig) -> Self {
        Self {
            chain_id: U64::from(chain.chain_id),
            chain_name: chain.chain_name.clone(),
            rpc_urls: chain.rpc_urls.clone(),
            native_currency: chain.native_currency.clone(),
            block_explorer_urls: chain.block_explorer_urls.clone(),
        }
    }
}

/// The parts of a transaction receipt msgboard cares about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: TxHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U64>,
    /// `0x1` on success, `0x0` on revert. Absent on pre-byzantium receipts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<U64>,
}

impl Receipt {
    /// Returns `false` if the transaction reverted.
    pub fn succeeded(&self) -> bool {
        self.status.is_none_or(|status| status == U64::from(1))
    }
}
