//! Uniform winner selection over the participant list.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniform random indexes, injected into the engine.
///
/// The selection algorithm never instantiates its own generator; a test
/// harness substitutes a deterministic implementation and a production
/// caller hands in an OS-seeded one.
pub trait RandomSource {
    /// A uniform index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct EntropySource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> EntropySource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl EntropySource<StdRng> {
    /// OS-seeded source for production use.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl EntropySource<ChaCha20Rng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for EntropySource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Pick one participant with uniform probability `1 / len`.
///
/// Precondition: `participants` is non-empty. The list builder guarantees
/// this by pinning the requester at index 0.
pub fn select_winner<'a, R: RandomSource + ?Sized>(
    participants: &'a [String],
    random: &mut R,
) -> &'a str {
    &participants[random.next_index(participants.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedIndex;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = EntropySource::seeded(7);
        let mut b = EntropySource::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.next_index(52), b.next_index(52));
        }
    }

    #[test]
    fn test_indexes_stay_in_bounds() {
        let mut source = EntropySource::seeded(42);
        for bound in 1..200 {
            let index = source.next_index(bound);
            assert!(index < bound);
        }
    }

    #[test]
    fn test_select_winner_by_index() {
        let participants: Vec<String> =
            ["alice", "bob", "carol"].iter().map(|s| s.to_string()).collect();
        let mut random = ScriptedIndex::always(1);
        assert_eq!(select_winner(&participants, &mut random), "bob");
    }

    #[test]
    fn test_single_participant_always_wins() {
        let participants = vec!["alice".to_string()];
        let mut source = EntropySource::seeded(3);
        for _ in 0..10 {
            assert_eq!(select_winner(&participants, &mut source), "alice");
        }
    }
}
