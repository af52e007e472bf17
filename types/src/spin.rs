use serde::{Deserialize, Serialize};

/// Immutable description of one completed spin.
///
/// Returned to the caller so a frontend can replay the wheel; the two
/// mutated records themselves are persisted by the directory as part of
/// the elimination transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Name of the participant that was eliminated.
    pub winner_name: String,
    /// The full ordered participant list the winner was drawn from,
    /// requester first.
    pub participants: Vec<String>,
}

impl SpinResult {
    pub fn new(winner_name: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            winner_name: winner_name.into(),
            participants,
        }
    }
}
