//! The spin orchestrator.

use crate::{
    directory::{CommitError, Directory},
    error::SpinError,
    participants::build_participants,
    selector::{select_winner, RandomSource},
    transaction::apply_elimination,
    window::resolve_window,
};
use tracing::{info, warn};
use wheelhouse_types::{PageWindow, SpinResult};

/// Sequences one spin end to end: validate the requester, gather
/// candidates, draw a winner, commit the elimination transaction.
///
/// The engine is stateless across requests; every spin reads and writes
/// the directory and nothing else. Randomness comes through the injected
/// [`RandomSource`].
pub struct SpinEngine<D, R> {
    directory: D,
    random: R,
}

impl<D: Directory, R: RandomSource> SpinEngine<D, R> {
    pub fn new(directory: D, random: R) -> Self {
        Self { directory, random }
    }

    /// The directory this engine operates on.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Caller-facing entry point.
    ///
    /// Every failure is recovered here and reported uniformly as `None`;
    /// the failure kind is only visible in the logs. No retry: a spin
    /// either completes as a whole unit or is abandoned entirely.
    pub async fn spin(&mut self, requester_name: &str, window: PageWindow) -> Option<SpinResult> {
        match self.try_spin(requester_name, window).await {
            Ok(result) => {
                info!(
                    requester = requester_name,
                    winner = %result.winner_name,
                    participants = result.participants.len(),
                    "spin committed"
                );
                Some(result)
            }
            Err(err) => {
                warn!(requester = requester_name, error = %err, "spin produced no result");
                None
            }
        }
    }

    /// One spin attempt with the full failure taxonomy.
    pub async fn try_spin(
        &mut self,
        requester_name: &str,
        window: PageWindow,
    ) -> Result<SpinResult, SpinError> {
        // Start -> RequesterValidated
        let requester = self
            .directory
            .find_by_name(requester_name)
            .await
            .map_err(CommitError::Store)?
            .ok_or_else(|| SpinError::RequesterNotFound(requester_name.to_string()))?;
        if requester.eliminated {
            return Err(SpinError::RequesterIneligible(requester_name.to_string()));
        }

        // RequesterValidated -> CandidatesGathered. Cannot fail on its own:
        // an empty window degenerates to [requester].
        let window_names = resolve_window(&self.directory, window)
            .await
            .map_err(CommitError::Store)?;
        let participants = build_participants(requester_name, window_names);

        // CandidatesGathered -> WinnerSelected
        let winner_name = select_winner(&participants, &mut self.random).to_string();
        let winner = self
            .directory
            .find_by_name(&winner_name)
            .await
            .map_err(CommitError::Store)?
            .ok_or(SpinError::WinnerNotFound(winner_name))?;

        // WinnerSelected -> Committed
        let (_, winner) = apply_elimination(&self.directory, requester, winner).await?;
        Ok(SpinResult::new(winner.name, participants))
    }
}
