//! Pluggable candidate shuffling for the minimum-staffing backfill.
//!
//! The backfill picks "any eligible worker" for an understaffed cell.  The
//! choice is made by shuffling the candidate pool through a [`Shuffler`], so
//! the only source of nondeterminism in a scheduling run sits behind one
//! trait that tests can seed or replace.
//!
//! | Implementation      | Order produced                                  |
//! |---------------------|-------------------------------------------------|
//! | [`SeededShuffler`]  | Fisher-Yates over a `SmallRng`; reproducible per seed |
//! | [`OrderedShuffler`] | Unchanged (roster registration order)           |

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::WorkerId;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Reorders a pool of candidate workers in place.
///
/// # Contract
///
/// - Must only permute `workers`; never add, drop, or duplicate entries.
/// - Must be deterministic given the same internal state.
pub trait Shuffler {
    fn shuffle(&mut self, workers: &mut [WorkerId]);
}

impl<S: Shuffler + ?Sized> Shuffler for &mut S {
    #[inline]
    fn shuffle(&mut self, workers: &mut [WorkerId]) {
        (**self).shuffle(workers)
    }
}

// ── SeededShuffler ────────────────────────────────────────────────────────────

/// Uniform random shuffling backed by a `SmallRng`.
///
/// The same seed always yields the same sequence of shuffles, so a whole
/// scheduling run is reproducible from its seed.
pub struct SeededShuffler(SmallRng);

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        SeededShuffler(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SeededShuffler(SmallRng::from_entropy())
    }
}

impl Shuffler for SeededShuffler {
    #[inline]
    fn shuffle(&mut self, workers: &mut [WorkerId]) {
        workers.shuffle(&mut self.0);
    }
}

// ── OrderedShuffler ───────────────────────────────────────────────────────────

/// A shuffler that leaves the pool as it is.
///
/// Candidates are then tried in roster registration order, which makes the
/// backfill fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderedShuffler;

impl Shuffler for OrderedShuffler {
    #[inline]
    fn shuffle(&mut self, _workers: &mut [WorkerId]) {}
}
