use crate::{AddEthereumChainParameter, ProviderRpcError, Receipt};
use alloy_primitives::{Address, Bytes, ChainId, TxHash};
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Result type of all [`WalletProvider`] requests.
pub type WalletResult<T> = Result<T, ProviderRpcError>;

/// The capabilities msgboard needs from an injected wallet.
///
/// Every method maps onto one EIP-1193 request. The wallet owns the keys: writes go through
/// `eth_sendTransaction`, which signs and broadcasts in one step.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Capability flag identifying the supported wallet (`window.ethereum.isMetaMask`).
    fn is_metamask(&self) -> bool;

    /// `eth_requestAccounts`. May prompt the user, and fails with
    /// [`ErrorCode::UserRejectedRequest`](crate::ErrorCode::UserRejectedRequest) if they decline.
    async fn request_accounts(&self) -> WalletResult<Vec<Address>>;

    /// `eth_chainId`.
    async fn chain_id(&self) -> WalletResult<ChainId>;

    /// `wallet_switchEthereumChain`. Fails with
    /// [`ErrorCode::UnrecognizedChain`](crate::ErrorCode::UnrecognizedChain) if the wallet does
    /// not know `chain_id`.
    async fn switch_chain(&self, chain_id: ChainId) -> WalletResult<()>;

    /// `wallet_addEthereumChain`.
    async fn add_chain(&self, chain: &AddEthereumChainParameter) -> WalletResult<()>;

    /// `eth_call` against the latest block.
    async fn call(&self, tx: &TransactionRequest) -> WalletResult<Bytes>;

    /// `eth_sendTransaction`.
    async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<TxHash>;

    /// `eth_getTransactionReceipt`, `None` while the transaction is pending.
    async fn transaction_receipt(&self, hash: TxHash) -> WalletResult<Option<Receipt>>;
}

#[async_trait]
impl<P: WalletProvider + ?Sized> WalletProvider for Arc<P> {
    fn is_metamask(&self) -> bool {
        (**self).is_metamask()
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        (**self).request_accounts().await
    }

    async fn chain_id(&self) -> WalletResult<ChainId> {
        (**self).chain_id().await
    }

    async fn switch_chain(&self, chain_id: ChainId) -> WalletResult<()> {
        (**self).switch_chain(chain_id).await
    }

    async fn add_chain(&self, chain: &AddEthereumChainParameter) -> WalletResult<()> {
        (**self).add_chain(chain).await
    }

    async fn call(&self, tx: &TransactionRequest) -> WalletResult<Bytes> {
        (**self).call(tx).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<TxHash> {
        (**self).send_transaction(tx).await
    }

    async fn transaction_receipt(&self, hash: TxHash) -> WalletResult<Option<Receipt>> {
        (**self).transaction_receipt(hash).await
    }
}
