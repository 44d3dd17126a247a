//! The two fixed vocabularies of a rota: days of the week and daily shifts.
//!
//! `Day` has a total order (Monday → Sunday) that the backfill phase and the
//! next-day move depend on.  `Shift` has no inherent order; `Shift::ALL` is
//! only the order cells are laid out and printed in.  Preference order is
//! always per worker, per day.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Day ───────────────────────────────────────────────────────────────────────

/// One day of the scheduling week.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Number of days in the week.
    pub const COUNT: usize = 7;

    /// All days in week order.
    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in the week, Monday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following day, or `None` for Sunday (the week does not wrap).
    pub fn next(self) -> Option<Day> {
        Day::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday    => "Monday",
            Day::Tuesday   => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday  => "Thursday",
            Day::Friday    => "Friday",
            Day::Saturday  => "Saturday",
            Day::Sunday    => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Parse(format!("unknown day {wanted:?}")))
    }
}

// ── Shift ─────────────────────────────────────────────────────────────────────

/// One of the three daily work periods.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// All shifts in layout order.  This is not a preference order.
    pub const ALL: [Shift; Shift::COUNT] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Column of this shift in a day's row of cells.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label, as used in preference input and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning   => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Evening   => "evening",
        }
    }

    /// Capitalised label for rendered schedules.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning   => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening   => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shift::ALL
            .into_iter()
            .find(|sh| sh.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Parse(format!(
                    "unknown shift {wanted:?}: expected \"morning\", \"afternoon\", or \"evening\""
                ))
            })
    }
}
