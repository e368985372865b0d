//! An in-memory wallet holding a single message board contract.

use alloy_primitives::{Address, B256, Bytes, ChainId, TxHash, U64, address};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use msgboard::{Config, IMessageBoard, MessageBoard};
use msgboard_config::ChainConfig;
use msgboard_wallet::{
    AddEthereumChainParameter, ErrorCode, ProviderRpcError, Receipt, WalletProvider, WalletResult,
};
use parking_lot::Mutex;
use std::{collections::HashSet, sync::Arc};

pub const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub const SEPOLIA: ChainId = 11155111;

#[derive(Debug)]
pub struct MockState {
    pub chain_id: ChainId,
    pub known_chains: HashSet<ChainId>,
    pub accounts: Vec<Address>,
    pub message: String,
    pub reject_accounts: bool,
    /// Error `eth_requestAccounts` fails with, takes precedence over `reject_accounts`.
    pub accounts_error: Option<ProviderRpcError>,
    pub reject_switch: bool,
    pub reject_add: bool,
    pub fail_chain_id: bool,
    /// Error `eth_call` fails with.
    pub call_error: Option<ProviderRpcError>,
    /// Error `eth_sendTransaction` fails with.
    pub send_error: Option<ProviderRpcError>,
    /// Mine sent transactions with a failed status.
    pub revert: bool,
    /// Number of receipt lookups answered with `None`.
    pub pending_polls: usize,
    pub sent: Vec<TransactionRequest>,
    pub calls: Vec<&'static str>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            chain_id: SEPOLIA,
            known_chains: HashSet::from([1, SEPOLIA]),
            accounts: vec![ALICE],
            message: "hello".to_string(),
            reject_accounts: false,
            accounts_error: None,
            reject_switch: false,
            reject_add: false,
            fail_chain_id: false,
            call_error: None,
            send_error: None,
            revert: false,
            pending_polls: 0,
            sent: Vec::new(),
            calls: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct MockWallet {
    pub is_metamask: bool,
    pub state: Mutex<MockState>,
}

impl Default for MockWallet {
    fn default() -> Self {
        Self { is_metamask: true, state: Mutex::default() }
    }
}

impl MockWallet {
    pub fn on_chain(chain_id: ChainId) -> Self {
        let wallet = Self::default();
        wallet.state.lock().chain_id = chain_id;
        wallet
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().calls.clone()
    }

    fn record(&self, method: &'static str) -> parking_lot::MutexGuard<'_, MockState> {
        let mut state = self.state.lock();
        state.calls.push(method);
        state
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn is_metamask(&self) -> bool {
        self.is_metamask
    }

    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        let state = self.record("eth_requestAccounts");
        if let Some(err) = &state.accounts_error {
            return Err(err.clone());
        }
        if state.reject_accounts {
            return Err(ProviderRpcError::user_rejected());
        }
        Ok(state.accounts.clone())
    }

    async fn chain_id(&self) -> WalletResult<ChainId> {
        let state = self.record("eth_chainId");
        if state.fail_chain_id {
            return Err(ProviderRpcError::new(ErrorCode::Disconnected, "disconnected"));
        }
        Ok(state.chain_id)
    }

    async fn switch_chain(&self, chain_id: ChainId) -> WalletResult<()> {
        let mut state = self.record("wallet_switchEthereumChain");
        if state.reject_switch {
            return Err(ProviderRpcError::user_rejected());
        }
        if !state.known_chains.contains(&chain_id) {
            return Err(ProviderRpcError::unrecognized_chain(chain_id));
        }
        state.chain_id = chain_id;
        Ok(())
    }

    async fn add_chain(&self, chain: &AddEthereumChainParameter) -> WalletResult<()> {
        let mut state = self.record("wallet_addEthereumChain");
        if state.reject_add {
            return Err(ProviderRpcError::user_rejected());
        }
        state.known_chains.insert(chain.chain_id.to());
        Ok(())
    }

    async fn call(&self, tx: &TransactionRequest) -> WalletResult<Bytes> {
        let state = self.record("eth_call");
        if let Some(err) = &state.call_error {
            return Err(err.clone());
        }
        let input = tx.input.input().cloned().unwrap_or_default();
        if !input.starts_with(&IMessageBoard::getMessageCall::SELECTOR) {
            return Err(ProviderRpcError::new(ErrorCode::ExecutionError, "execution reverted"));
        }
        Ok((state.message.clone(),).abi_encode_params().into())
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<TxHash> {
        let mut state = self.record("eth_sendTransaction");
        if let Some(err) = &state.send_error {
            return Err(err.clone());
        }
        let input = tx.input.input().cloned().unwrap_or_default();
        let call = IMessageBoard::setMessageCall::abi_decode(&input)
            .map_err(|e| ProviderRpcError::new(ErrorCode::InvalidParams, e.to_string()))?;
        if !state.revert {
            state.message = call.newMessage;
        }
        state.sent.push(tx.clone());
        Ok(B256::with_last_byte(state.sent.len() as u8))
    }

    async fn transaction_receipt(&self, hash: TxHash) -> WalletResult<Option<Receipt>> {
        let mut state = self.record("eth_getTransactionReceipt");
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(None);
        }
        Ok(Some(Receipt {
            transaction_hash: hash,
            block_number: Some(U64::from(1)),
            status: Some(U64::from(!state.revert as u8)),
        }))
    }
}

pub fn config() -> Config {
    Config { poll_interval_ms: 10, chain: ChainConfig::sepolia(), ..Default::default() }
}

/// A board over `wallet`, with the wallet still reachable for assertions.
pub fn board(wallet: MockWallet) -> (MessageBoard<Arc<MockWallet>>, Arc<MockWallet>) {
    let wallet = Arc::new(wallet);
    (MessageBoard::new(Some(wallet.clone()), config()), wallet)
}
