use rota_core::{CoreError, Day};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("worker name must not be empty")]
    EmptyName,

    #[error("worker {0:?} is registered more than once")]
    DuplicateWorker(String),

    #[error("invalid shift ranking {ranking:?}: {reason}")]
    InvalidRanking { ranking: String, reason: String },

    #[error("worker {worker:?} has no preferences for {missing:?}")]
    MissingDays { worker: String, missing: Vec<Day> },

    #[error("worker {worker:?} has more than one preference row for {day}")]
    DuplicateDay { worker: String, day: Day },

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
