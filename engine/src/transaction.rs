//! The elimination transaction: one spin's two mutations as a single
//! all-or-nothing unit.

use crate::directory::{CommitError, Directory};
use anyhow::anyhow;
use wheelhouse_types::Participant;

/// Commit one spin: eliminate the winner and increment the requester's
/// action counter by exactly 1.
///
/// Both mutations go through the directory's atomic write path, so either
/// both are durable or neither is. When the requester won their own spin
/// the two effects land on the one record through a single save, and both
/// must be observable afterward.
///
/// Returns the saved `(requester, winner)` records; on self-elimination
/// they are the same record.
pub async fn apply_elimination<D: Directory>(
    directory: &D,
    requester: Participant,
    winner: Participant,
) -> Result<(Participant, Participant), CommitError> {
    if requester.name == winner.name {
        let mut record = winner;
        record.record_spin();
        record.eliminate();
        let saved = directory.save(record).await?;
        return Ok((saved.clone(), saved));
    }

    let mut requester = requester;
    requester.record_spin();
    let mut winner = winner;
    winner.eliminate();

    let mut saved = directory
        .save_all(vec![requester, winner])
        .await?
        .into_iter();
    match (saved.next(), saved.next()) {
        (Some(requester), Some(winner)) => Ok((requester, winner)),
        _ => Err(CommitError::Store(anyhow!(
            "batch save returned fewer records than submitted"
        ))),
    }
}
