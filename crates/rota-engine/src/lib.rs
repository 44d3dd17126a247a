//! `rota-engine`: assigns a roster of workers to the weekly shift grid.
//!
//! # Three-phase run
//!
//! ```text
//! ① Placement  : each worker (registration order), each day (Mon → Sun):
//!                  take the best-ranked shift that still has room, while
//!                  under the weekly cap.
//! ② Backfill   : each day, each shift below the floor: shuffle the
//!                  workers free that day and under the cap, add them until
//!                  the floor or the ceiling is reached; warn if neither
//!                  the floor nor a full pool was enough.
//! ③ Resolution : each worker, each day they work (snapshot): if not on
//!                  their top choice, move up to a better shift with room
//!                  that day, else try the next day's top choice.  One
//!                  pass, one remedy per (worker, day).
//! ```
//!
//! The only nondeterminism is the shuffle in ②, supplied through
//! [`rota_core::Shuffler`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rota_engine::{NoopObserver, SchedulerBuilder};
//!
//! let roster = rota_roster::load_roster_csv(path)?;
//! let mut scheduler = SchedulerBuilder::new(roster).seed(42).build()?;
//! let outcome = scheduler.run(&mut NoopObserver)?;
//! for warning in &outcome.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;

mod backfill;
mod placement;
mod resolve;


pub use builder::SchedulerBuilder;
pub use engine::Scheduler;
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, RecordingObserver, SchedulerObserver};
pub use outcome::{MoveKind, Phase, Reassignment, ScheduleOutcome, StaffingWarning};
