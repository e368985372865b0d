//! A JSON-RPC stub standing in for a wallet endpoint.

use alloy_primitives::{Address, B256, U64, address};
use axum::{Json, Router, extract::State, routing::post};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::{collections::HashSet, net::SocketAddr, sync::Arc};
use tokio::task::JoinHandle;

pub const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub const TX_HASH: B256 =
    alloy_primitives::b256!("0x5cf1ffc2a4d8d6b9e0a5a39c2a1f5d9e3b6b0f6b0e1d9d9f3f1e5a2c7c7d8e9f");

/// Mutable state of the stub.
#[derive(Debug)]
pub struct StubState {
    pub chain_id: u64,
    pub known_chains: HashSet<u64>,
    pub accounts: Vec<Address>,
    /// Answer `eth_requestAccounts` with -32601, like a plain node.
    pub plain_node: bool,
    /// Answer `eth_requestAccounts` with 4001.
    pub reject_accounts: bool,
    /// Number of `eth_getTransactionReceipt` polls answered with `null`.
    pub pending_polls: usize,
    pub calls: Vec<String>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            chain_id: 1,
            known_chains: HashSet::from([1]),
            accounts: vec![ALICE],
            plain_node: false,
            reject_accounts: false,
            pending_polls: 0,
            calls: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StubWallet {
    pub state: Arc<Mutex<StubState>>,
}

impl StubWallet {
    fn dispatch(&self, method: &str, params: &Value) -> Result<Value, Value> {
        let mut state = self.state.lock();
        state.calls.push(method.to_string());
        match method {
            "eth_chainId" => Ok(json!(U64::from(state.chain_id))),
            "eth_requestAccounts" if state.plain_node => {
                Err(json!({ "code": -32601, "message": "Method not found" }))
            }
            "eth_requestAccounts" if state.reject_accounts => {
                Err(json!({ "code": 4001, "message": "User rejected the request." }))
            }
            "eth_requestAccounts" | "eth_accounts" => Ok(json!(state.accounts)),
            "wallet_switchEthereumChain" => {
                let chain_id = parse_chain_id(&params[0]["chainId"]);
                if !state.known_chains.contains(&chain_id) {
                    return Err(json!({
                        "code": 4902,
                        "message": format!("Unrecognized chain ID \"{chain_id:#x}\"."),
                    }));
                }
                state.chain_id = chain_id;
                Ok(Value::Null)
            }
            "wallet_addEthereumChain" => {
                let chain_id = parse_chain_id(&params[0]["chainId"]);
                state.known_chains.insert(chain_id);
                Ok(Value::Null)
            }
            "eth_call" => {
                if params[1] != json!("latest") {
                    return Err(json!({ "code": -32602, "message": "expected latest block" }));
                }
                Ok(json!("0xdeadbeef"))
            }
            "eth_sendTransaction" => Ok(json!(TX_HASH)),
            "eth_getTransactionReceipt" => {
                if state.pending_polls > 0 {
                    state.pending_polls -= 1;
                    return Ok(Value::Null);
                }
                Ok(json!({
                    "transactionHash": params[0],
                    "blockNumber": "0x1",
                    "status": "0x1",
                }))
            }
            _ => Err(json!({ "code": -32601, "message": "Method not found" })),
        }
    }

    /// Serves the stub on an ephemeral port and returns its URL.
    pub async fn spawn(&self) -> (String, JoinHandle<()>) {
        let app = Router::new().route("/", post(handle)).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), handle)
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }
}

async fn handle(State(wallet): State<StubWallet>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default();
    let body = match wallet.dispatch(method, &request["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(error) => json!({ "jsonrpc": "2.0", "id": id, "error": error }),
    };
    Json(body)
}

fn parse_chain_id(value: &Value) -> u64 {
    serde_json::from_value::<U64>(value.clone()).map(|id| id.to()).unwrap_or_default()
}
