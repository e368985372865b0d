//! # msgboard
//!
//! Reads and writes a single string stored in a smart contract, through an injected wallet.
//!
//! [`MessageBoard`] is the controller: the presentation layer feeds it user input
//! ([`set_draft`](MessageBoard::set_draft)) and actions ([`handle_get`](MessageBoard::handle_get),
//! [`handle_set`](MessageBoard::handle_set), [`switch_network`](MessageBoard::switch_network)),
//! then renders a [`Snapshot`] of its state. Each action runs the same sequence: ensure wallet,
//! ensure network, ensure account, call the contract.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod account;
mod board;
mod message;
mod network;
mod state;

pub mod contract;
pub mod view;

mod error;
pub use error::BoardError;

pub use board::MessageBoard;
pub use contract::{ContractError, IMessageBoard, MessageBoardContract, PendingMessage};
pub use network::{NetworkStatus, network_label};
pub use state::OperationState;
pub use view::{BoardView, Snapshot};

pub use msgboard_config::Config;
pub use msgboard_wallet as wallet;
