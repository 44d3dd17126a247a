//! `rota-roster`: the workers to schedule and their shift preferences.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`preference`] | `ShiftRanking` (one day), `PreferenceTable` (whole week)  |
//! | [`roster`]     | `Worker`, `Roster`, `RosterBuilder`                       |
//! | [`loader`]     | `load_roster_csv`, `load_roster_reader`                   |
//! | [`error`]      | `RosterError`, `RosterResult<T>`                          |
//!
//! Preferences are validated once, on the way in.  After a `Roster` is built
//! it is immutable and the scheduler trusts it completely: every worker has
//! a ranking for every day, and every ranking is a permutation of the three
//! shifts.

pub mod error;
pub mod loader;
pub mod preference;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{RosterError, RosterResult};
pub use loader::{load_roster_csv, load_roster_reader};
pub use preference::{PreferenceTable, ShiftRanking};
pub use roster::{Roster, RosterBuilder, Worker};
