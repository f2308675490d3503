//! Transfer state machine types

use serde::{Deserialize, Serialize};

/// State of one file's transfer
///
/// `Idle → Transferring → {Succeeded, Failed}`. `Transferring` is
/// entered immediately when the driver starts; the terminal states are
/// never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferState {
    Idle,
    Transferring,
    Succeeded,
    Failed,
}

impl TransferState {
    /// Whether this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferState::Succeeded | TransferState::Failed)
    }
}

impl Default for TransferState {
    fn default() -> Self {
        TransferState::Idle
    }
}
