use crate::directory::CommitError;
use thiserror::Error;

/// Why a spin attempt produced no result.
///
/// Every variant is terminal for its attempt; the engine never retries.
/// Callers see all of them uniformly as "no result", so the distinction
/// only matters for diagnostics.
#[derive(Debug, Error)]
pub enum SpinError {
    /// The requester does not exist in the directory.
    #[error("requester '{0}' not found")]
    RequesterNotFound(String),
    /// The requester has already been eliminated and may not spin.
    #[error("requester '{0}' is already eliminated")]
    RequesterIneligible(String),
    /// The selected winner no longer resolves to a live record.
    #[error("winner '{0}' not found")]
    WinnerNotFound(String),
    /// The elimination transaction failed: version conflict or store error.
    #[error("elimination failed: {0}")]
    EliminationFailed(#[from] CommitError),
}
