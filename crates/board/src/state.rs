use serde::Serialize;
use std::fmt;

/// Where an operation currently is.
///
/// `Idle → Validating → CheckingNetwork → [SwitchingNetwork] → Authorizing → CallingContract →
/// [Confirming] → Done | Failed`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationState {
    #[default]
    Idle,
    Validating,
    CheckingNetwork,
    SwitchingNetwork,
    Authorizing,
    CallingContract,
    /// Write only: waiting for the transaction to be mined.
    Confirming,
    Done,
    Failed,
}

impl OperationState {
    /// Moves to `next`.
    pub(crate) fn enter(&mut self, next: Self) {
        trace!(target: "msgboard::state", from = %self, to = %next, "transition");
        *self = next;
    }

    /// Returns `true` once the operation has run to completion.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::CheckingNetwork => "checking network",
            Self::SwitchingNetwork => "switching network",
            Self::Authorizing => "authorizing",
            Self::CallingContract => "calling contract",
            Self::Confirming => "confirming",
            Self::Done => "done",
            Self::Failed => "failed",
        })
    }
}
