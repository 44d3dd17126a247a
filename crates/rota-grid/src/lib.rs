//! `rota-grid`: the weekly assignment grid and per-worker workload state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`schedule`] | `Schedule` (7 × 3 grid + worker state), `ShiftCell` |
//! | [`error`]    | `GridError`, `GridResult<T>`               |
//!
//! # Dual-state model
//!
//! Every assignment is visible from two directions:
//!
//! ```text
//! cell (day, shift)  ──► [worker, worker, …]        (assignment-time order)
//! worker             ──► [day → Option<shift>; 7]   (+ days-worked counter)
//! ```
//!
//! Both views live inside [`Schedule`] and are only ever changed together by
//! `assign`, `unassign`, and `reassign`.  Callers cannot reach either view
//! mutably, so a worker is in cell `(day, shift)` if and only if their
//! own table maps `day → shift`.

pub mod error;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use schedule::{Schedule, ShiftCell};
