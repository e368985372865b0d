//! Terminal rendering of the board state.

use crate::{NetworkStatus, OperationState};
use alloy_primitives::Address;
use serde::Serialize;
use std::fmt;
use yansi::Paint;

/// A point-in-time copy of everything the presentation layer shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub draft: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub network: Option<NetworkStatus>,
    pub notice: Option<String>,
    pub account: Option<Address>,
    pub state: OperationState,
    /// Display name of the target chain.
    pub target: String,
}

/// Renders a [`Snapshot`].
///
/// ```text
/// Current Network: Ethereum Mainnet
///   Switch to Sepolia Testnet with `switch-network`.
///
/// Stored Message:
///   hello
///
/// Error: Wrong network detected: Ethereum Mainnet. Please switch to Sepolia Testnet.
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    banner_only: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot, banner_only: false }
    }

    /// Only render the network banner and the error.
    pub fn banner_only(mut self) -> Self {
        self.banner_only = true;
        self
    }

    fn banner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;
        write!(f, "{} ", "Current Network:".bold())?;
        match &s.network {
            None => writeln!(f, "{}", "Not connected".dim())?,
            Some(network) if network.on_target => writeln!(f, "{}", network.label.green())?,
            Some(network) => {
                writeln!(f, "{}", network.label.red())?;
                writeln!(f, "  Switch to {} with `switch-network`.", s.target)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;
        self.banner(f)?;

        if !self.banner_only {
            if let Some(account) = s.account {
                writeln!(f, "{} {account}", "Account:".bold())?;
            }
            if !s.draft.is_empty() {
                writeln!(f, "{} {}", "Draft:".bold(), s.draft)?;
            }
            if let Some(message) = &s.message {
                writeln!(f)?;
                writeln!(f, "{}", "Stored Message:".bold())?;
                writeln!(f, "  {message}")?;
            }
            if let Some(notice) = &s.notice {
                writeln!(f)?;
                writeln!(f, "{}", notice.green())?;
            }
        }

        if let Some(error) = &s.error {
            writeln!(f)?;
            writeln!(f, "{}", format!("Error: {error}").red())?;
        }
        Ok(())
    }
}
