//! Fluent builder for constructing a [`Scheduler`].

use rota_core::{SeededShuffler, Shuffler, StaffingLimits};
use rota_grid::Schedule;
use rota_roster::Roster;

use crate::{EngineResult, Scheduler};

/// Fluent builder for [`Scheduler<S>`].
///
/// # Required inputs
///
/// - [`Roster`]: the workers and their preferences, in priority order.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.limits(l)`      | `StaffingLimits::default()` (2 / 3 / 5)  |
/// | `.shuffler(s)`    | `SeededShuffler::from_entropy()`         |
/// | `.seed(n)`        | shorthand for `.shuffler(SeededShuffler::new(n))` |
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = SchedulerBuilder::new(roster)
///     .seed(42)
///     .build()?;
/// let outcome = scheduler.run(&mut NoopObserver)?;
/// ```
pub struct SchedulerBuilder<S: Shuffler> {
    roster:   Roster,
    limits:   StaffingLimits,
    shuffler: S,
}

impl SchedulerBuilder<SeededShuffler> {
    /// Create a builder with an entropy-seeded shuffler and default limits.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            limits:   StaffingLimits::default(),
            shuffler: SeededShuffler::from_entropy(),
        }
    }
}

impl<S: Shuffler> SchedulerBuilder<S> {
    /// Override the staffing floor, ceiling, or weekly cap.
    pub fn limits(mut self, limits: StaffingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the backfill shuffle source.
    pub fn shuffler<T: Shuffler>(self, shuffler: T) -> SchedulerBuilder<T> {
        SchedulerBuilder {
            roster: self.roster,
            limits: self.limits,
            shuffler,
        }
    }

    /// Use a reproducible [`SeededShuffler`].
    pub fn seed(self, seed: u64) -> SchedulerBuilder<SeededShuffler> {
        self.shuffler(SeededShuffler::new(seed))
    }

    /// Validate the limits and return a ready-to-run [`Scheduler`] with an
    /// empty grid.
    pub fn build(self) -> EngineResult<Scheduler<S>> {
        self.limits.validate()?;

        let schedule = Schedule::new(self.roster.len(), self.limits);
        Ok(Scheduler {
            roster:   self.roster,
            schedule,
            shuffler: self.shuffler,
        })
    }
}
