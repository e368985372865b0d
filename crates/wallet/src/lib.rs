//! # msgboard-wallet
//!
//! Wallet provider abstraction following:
//! - [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193): Ethereum Provider JavaScript API
//! - [EIP-3085](https://eips.ethereum.org/EIPS/eip-3085): `wallet_addEthereumChain`
//! - [EIP-3326](https://eips.ethereum.org/EIPS/eip-3326): `wallet_switchEthereumChain`
//!
//! The [`WalletProvider`] trait is the seam between the message board and whatever holds the
//! user's keys. [`RpcWalletProvider`] implements it over a JSON-RPC endpoint.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::{ErrorCode, ProviderRpcError};

mod provider;
pub use provider::{WalletProvider, WalletResult};

pub mod rpc;
pub use rpc::RpcWalletProvider;

mod types;
pub use types::{AddEthereumChainParameter, EthereumRequest, Receipt, SwitchEthereumChainParameter};
