//! A [`WalletProvider`] backed by a JSON-RPC endpoint.

use crate::{AddEthereumChainParameter, EthereumRequest, Receipt, WalletProvider, WalletResult};
use alloy_primitives::{Address, Bytes, ChainId, TxHash, U64};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

/// Forwards every request to a JSON-RPC endpoint over HTTP.
///
/// The endpoint is expected to hold the accounts itself: a wallet bridge, or a development node
/// with unlocked accounts. Nodes that do not implement `eth_requestAccounts` are asked for
/// `eth_accounts` instead.
#[derive(Clone)]
pub struct RpcWalletProvider {
    client: RpcClient,
    url: Url,
    is_metamask: bool,
}

impl fmt::Debug for RpcWalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWalletProvider")
            .field("url", &self.url.as_str())
            .field("is_metamask", &self.is_metamask)
            .finish()
    }
}

impl RpcWalletProvider {
    /// Creates a provider for the given endpoint.
    ///
    /// A `localhost:<port>` shorthand is accepted and treated as plain HTTP.
    pub fn new(url: &str) -> Result<Self, url::ParseError> {
        let url = match url.strip_prefix("localhost:") {
            Some(_) => Url::parse(&format!("http://{url}")),
            None => Url::parse(url),
        }?;
        let client = ClientBuilder::default().http(url.clone());
        Ok(Self { client, url, is_metamask: true })
    }

    /// Sets the capability flag reported by [`WalletProvider::is_metamask`].
    pub fn with_metamask(mut self, is_metamask: bool) -> Self {
        self.is_metamask = is_metamask;
        self
    }

    /// The endpoint requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends a single request and decodes its result.
    pub async fn request<R>(&self, request: EthereumRequest) -> WalletResult<R>
    where
        R: DeserializeOwned + fmt::Debug + Send + Sync + Unpin + 'static,
    {
        let method = request.method();
        trace!(target: "msgboard::wallet", %method, url = %self.url, "sending request");
        let result = self.client.request(method, request.params()).await;
        if let Err(err) = &result {
            debug!(target: "msgboard::wallet", %method, %err, "request failed");
        }
        Ok(result?)
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    fn is_metamask(&self) -> bool {
        self.is_metamask
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        match self.request(EthereumRequest::RequestAccounts).await {
            Err(err) if err.is_unsupported_method() => {
                debug!(
                    target: "msgboard::wallet",
                    "eth_requestAccounts unsupported, falling back to eth_accounts"
                );
                self.request(EthereumRequest::Accounts).await
            }
            res => res,
        }
    }

    async fn chain_id(&self) -> WalletResult<ChainId> {
        let chain_id: U64 = self.request(EthereumRequest::ChainId).await?;
        Ok(chain_id.to())
    }

    async fn switch_chain(&self, chain_id: ChainId) -> WalletResult<()> {
        self.request::<serde_json::Value>(EthereumRequest::switch_chain(chain_id)).await?;
        Ok(())
    }

    async fn add_chain(&self, chain: &AddEthereumChainParameter) -> WalletResult<()> {
        let request = EthereumRequest::AddEthereumChain([chain.clone()]);
        self.request::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn call(&self, tx: &TransactionRequest) -> WalletResult<Bytes> {
        self.request(EthereumRequest::call(tx.clone())).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<TxHash> {
        self.request(EthereumRequest::SendTransaction([tx.clone()])).await
    }

    async fn transaction_receipt(&self, hash: TxHash) -> WalletResult<Option<Receipt>> {
        self.request(EthereumRequest::GetTransactionReceipt([hash])).await
    }
}
