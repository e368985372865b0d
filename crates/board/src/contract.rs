//! Bindings for the deployed message board contract.

use alloy_primitives::{Address, TxHash, TxKind};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::{SolCall, sol};
use msgboard_wallet::{ProviderRpcError, Receipt, WalletProvider};
use std::time::Duration;

sol! {
    /// Interface of the message board contract.
    #[derive(Debug, PartialEq, Eq)]
    interface IMessageBoard {
        function getMessage() external view returns (string memory);
        function setMessage(string memory newMessage) external;
    }
}

/// Errors of a contract interaction.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The wallet failed the request: rejected by the user, reverted during simulation, out of
    /// gas, ...
    #[error(transparent)]
    Provider(#[from] ProviderRpcError),
    #[error("failed to decode contract output: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    /// The transaction was mined but reverted.
    #[error("transaction reverted")]
    Reverted(TxHash),
}

/// A message board contract at a fixed address, called through a [`WalletProvider`].
#[derive(Debug)]
pub struct MessageBoardContract<'a, P> {
    address: Address,
    provider: &'a P,
}

impl<'a, P: WalletProvider> MessageBoardContract<'a, P> {
    pub fn new(address: Address, provider: &'a P) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Calls `getMessage()`. Read-only, no transaction is sent.
    pub async fn get_message(&self) -> Result<String, ContractError> {
        let tx = self.request(IMessageBoard::getMessageCall {}.abi_encode());
        let output = self.provider.call(&tx).await?;
        trace!(target: "msgboard::contract", len = output.len(), "getMessage returned");
        Ok(IMessageBoard::getMessageCall::abi_decode_returns(&output)?)
    }

    /// Sends `setMessage(message)` from `from` and returns a handle to the pending transaction.
    ///
    /// Signing happens in the wallet.
    pub async fn set_message(
        &self,
        from: Address,
        message: String,
    ) -> Result<PendingMessage<'a, P>, ContractError> {
        let calldata = IMessageBoard::setMessageCall { newMessage: message }.abi_encode();
        let mut tx = self.request(calldata);
        tx.from = Some(from);
        let hash = self.provider.send_transaction(&tx).await?;
        debug!(target: "msgboard::contract", %hash, %from, "setMessage submitted");
        Ok(PendingMessage::new(self.provider, hash))
    }

    fn request(&self, calldata: Vec<u8>) -> TransactionRequest {
        TransactionRequest {
            to: Some(TxKind::Call(self.address)),
            input: TransactionInput::both(calldata.into()),
            ..Default::default()
        }
    }
}

/// A submitted `setMessage` transaction.
#[derive(Debug)]
#[must_use = "a pending transaction does nothing unless waited on"]
pub struct PendingMessage<'a, P> {
    provider: &'a P,
    hash: TxHash,
    poll_interval: Duration,
}

impl<'a, P: WalletProvider> PendingMessage<'a, P> {
    /// The default receipt polling interval.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

    /// Shorter intervals are raised to this.
    pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

    pub fn new(provider: &'a P, hash: TxHash) -> Self {
        Self { provider, hash, poll_interval: Self::DEFAULT_POLL_INTERVAL }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(Self::MIN_POLL_INTERVAL);
        self
    }

    pub fn tx_hash(&self) -> TxHash {
        self.hash
    }

    /// Waits until the transaction is mined.
    ///
    /// There is no timeout: a transaction that is never mined blocks forever.
    pub async fn wait(self) -> Result<Receipt, ContractError> {
        loop {
            if let Some(receipt) = self.provider.transaction_receipt(self.hash).await? {
                if !receipt.succeeded() {
                    return Err(ContractError::Reverted(self.hash));
                }
                debug!(
                    target: "msgboard::contract",
                    hash = %self.hash,
                    block = ?receipt.block_number,
                    "confirmed"
                );
                return Ok(receipt);
            }
            trace!(target: "msgboard::contract", hash = %self.hash, "pending");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
