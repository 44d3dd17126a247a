//! Scheduler observer trait for progress reporting and data collection.

use crate::{Phase, Reassignment, StaffingWarning};

/// Callbacks invoked by [`Scheduler`][crate::Scheduler] as a run progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: warning printer
///
/// ```rust,ignore
/// struct WarningPrinter;
///
/// impl SchedulerObserver for WarningPrinter {
///     fn on_understaffed(&mut self, warning: &StaffingWarning) {
///         println!("Warning: {warning}.");
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// Called before a phase starts.
    fn on_phase_start(&mut self, _phase: Phase) {}

    /// Called after a phase completes.
    ///
    /// `changes` is the number of assignments the phase made (placement,
    /// backfill) or moved (resolution).
    fn on_phase_end(&mut self, _phase: Phase, _changes: usize) {}

    /// Called once per cell the backfill leaves below the floor.
    fn on_understaffed(&mut self, _warning: &StaffingWarning) {}

    /// Called once per move the resolution phase applies.
    fn on_reassigned(&mut self, _reassignment: &Reassignment) {}
}

/// A [`SchedulerObserver`] that does nothing.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}

/// A [`SchedulerObserver`] that keeps every event it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub started:       Vec<Phase>,
    pub finished:      Vec<(Phase, usize)>,
    pub warnings:      Vec<StaffingWarning>,
    pub reassignments: Vec<Reassignment>,
}

impl SchedulerObserver for RecordingObserver {
    fn on_phase_start(&mut self, phase: Phase) {
        self.started.push(phase);
    }

    fn on_phase_end(&mut self, phase: Phase, changes: usize) {
        self.finished.push((phase, changes));
    }

    fn on_understaffed(&mut self, warning: &StaffingWarning) {
        self.warnings.push(*warning);
    }

    fn on_reassigned(&mut self, reassignment: &Reassignment) {
        self.reassignments.push(*reassignment);
    }
}
