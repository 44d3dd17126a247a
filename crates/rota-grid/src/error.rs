use rota_core::{Day, Shift, WorkerId};
use thiserror::Error;

/// A rejected grid mutation.
///
/// The scheduler only mutates under guards that rule these out, so seeing
/// one from the engine means a logic error, not bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{0} is not part of this schedule")]
    UnknownWorker(WorkerId),

    #[error("{shift} on {day} is full ({capacity} workers)")]
    CellFull { day: Day, shift: Shift, capacity: usize },

    #[error("{worker} already works the {shift} shift on {day}")]
    AlreadyWorking { worker: WorkerId, day: Day, shift: Shift },

    #[error("{worker} already works {cap} days this week")]
    WeeklyCapReached { worker: WorkerId, cap: usize },

    #[error("{worker} is not assigned to {shift} on {day}")]
    NotAssigned { worker: WorkerId, day: Day, shift: Shift },

    #[error("{worker} does not work on {day}")]
    NotWorking { worker: WorkerId, day: Day },

    #[error("schedule is inconsistent: {0}")]
    Inconsistent(String),
}

pub type GridResult<T> = Result<T, GridError>;
