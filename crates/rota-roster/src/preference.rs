//! Ranked shift preferences: `ShiftRanking` for one day, `PreferenceTable`
//! for the whole week.
//!
//! A ranking is always a permutation of all three shifts.  Rank 0 is the
//! worker's first choice; the scheduler never needs a worker to be willing
//! or unwilling, only the order in which shifts are acceptable.

use std::fmt;
use std::str::FromStr;

use rota_core::{Day, Shift};

use crate::{RosterError, RosterResult};

// ── ShiftRanking ──────────────────────────────────────────────────────────────

/// One worker's ordered shift choices for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftRanking([Shift; Shift::COUNT]);

impl ShiftRanking {
    /// Build a ranking from three shifts, best first.
    ///
    /// Fails if any shift is repeated (which, with exactly three slots, also
    /// means one is missing).
    pub fn new(order: [Shift; Shift::COUNT]) -> RosterResult<Self> {
        for (i, shift) in order.iter().enumerate() {
            if order[..i].contains(shift) {
                return Err(RosterError::InvalidRanking {
                    ranking: describe(&order),
                    reason:  format!("{shift} appears more than once"),
                });
            }
        }
        Ok(Self(order))
    }

    /// The most preferred shift.
    #[inline]
    pub fn top(&self) -> Shift {
        self.0[0]
    }

    /// Shifts in preference order, best first.
    pub fn iter(&self) -> impl Iterator<Item = Shift> + '_ {
        self.0.iter().copied()
    }

    pub fn as_array(&self) -> [Shift; Shift::COUNT] {
        self.0
    }

    /// Rank of `shift`, 0 = most preferred.
    pub fn rank_of(&self, shift: Shift) -> usize {
        // Every shift is present in a valid ranking.
        self.0.iter().position(|&s| s == shift).unwrap_or(Shift::COUNT)
    }

    /// Shifts ranked strictly above `shift`, best first.
    ///
    /// Empty when `shift` is already the top choice.
    pub fn preferred_over(&self, shift: Shift) -> impl Iterator<Item = Shift> + '_ {
        self.0.iter().copied().take_while(move |&s| s != shift)
    }
}

impl Default for ShiftRanking {
    /// Morning, then afternoon, then evening.
    fn default() -> Self {
        Self(Shift::ALL)
    }
}

impl fmt::Display for ShiftRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(&self.0))
    }
}

impl FromStr for ShiftRanking {
    type Err = RosterError;

    /// Parse a comma-separated ranking such as `"evening, morning, afternoon"`.
    ///
    /// Exactly three entries, each a known shift label (any case), none
    /// repeated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| RosterError::InvalidRanking {
            ranking: s.trim().to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != Shift::COUNT {
            return Err(invalid(format!(
                "expected {} comma-separated shifts, got {}",
                Shift::COUNT,
                parts.len()
            )));
        }

        let mut order = [Shift::Morning; Shift::COUNT];
        for (slot, part) in order.iter_mut().zip(&parts) {
            *slot = part.parse::<Shift>().map_err(|e| invalid(e.to_string()))?;
        }
        Self::new(order)
    }
}

fn describe(order: &[Shift]) -> String {
    order.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}

// ── PreferenceTable ───────────────────────────────────────────────────────────

/// A worker's rankings for every day of the week.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceTable {
    by_day: [ShiftRanking; Day::COUNT],
}

impl PreferenceTable {
    /// One ranking per day, indexed by `Day::index()`.
    pub fn new(by_day: [ShiftRanking; Day::COUNT]) -> Self {
        Self { by_day }
    }

    /// The same ranking on every day.
    pub fn uniform(ranking: ShiftRanking) -> Self {
        Self { by_day: [ranking; Day::COUNT] }
    }

    /// Replace the ranking for one day.
    pub fn with_day(mut self, day: Day, ranking: ShiftRanking) -> Self {
        self.by_day[day.index()] = ranking;
        self
    }

    #[inline]
    pub fn for_day(&self, day: Day) -> &ShiftRanking {
        &self.by_day[day.index()]
    }

    /// `(day, ranking)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &ShiftRanking)> + '_ {
        Day::ALL.into_iter().zip(self.by_day.iter())
    }
}
