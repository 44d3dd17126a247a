//! `rota-core`: foundational types for the `rota` shift scheduler.
//!
//! This crate is a dependency of every other `rota-*` crate.  It has no
//! `rota-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`calendar`]    | `Day` (7, week-ordered), `Shift` (3, unordered)        |
//! | [`ids`]         | `WorkerId`                                            |
//! | [`config`]      | `StaffingLimits` (floor, ceiling, weekly cap)         |
//! | [`rng`]         | `Shuffler` trait, `SeededShuffler`, `OrderedShuffler` |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod calendar;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{Day, Shift};
pub use config::StaffingLimits;
pub use error::{CoreError, CoreResult};
pub use ids::WorkerId;
pub use rng::{OrderedShuffler, SeededShuffler, Shuffler};
