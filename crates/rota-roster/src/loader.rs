//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per worker per day.  Every worker must have exactly one row for
//! each of the seven days.  Workers are registered in the order their first
//! row appears, which fixes their scheduling priority.
//!
//! ```csv
//! worker,day,first,second,third
//! Ann,Monday,morning,afternoon,evening
//! Ann,Tuesday,evening,morning,afternoon
//! ...
//! Bob,Monday,afternoon,morning,evening
//! ```
//!
//! Day and shift labels are case-insensitive.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rota_core::{Day, Shift};

use crate::{PreferenceTable, Roster, RosterBuilder, RosterError, RosterResult, ShiftRanking};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PreferenceRecord {
    worker: String,
    day:    String,
    first:  String,
    second: String,
    third:  String,
}

/// Rows gathered for one worker before validation.
struct PendingWorker {
    name:   String,
    by_day: [Option<ShiftRanking>; Day::COUNT],
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Roster`] from a CSV file.
pub fn load_roster_csv(path: &Path) -> RosterResult<Roster> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
pub fn load_roster_reader<R: Read>(reader: R) -> RosterResult<Roster> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pending: Vec<PendingWorker> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<PreferenceRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;

        let day: Day = row.day.parse()?;
        let ranking = ShiftRanking::new([
            row.first.parse::<Shift>()?,
            row.second.parse::<Shift>()?,
            row.third.parse::<Shift>()?,
        ])?;

        let name = row.worker.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let idx = *position.entry(name.clone()).or_insert_with(|| {
            pending.push(PendingWorker { name: name.clone(), by_day: [None; Day::COUNT] });
            pending.len() - 1
        });

        let slot = &mut pending[idx].by_day[day.index()];
        if slot.is_some() {
            return Err(RosterError::DuplicateDay { worker: name, day });
        }
        *slot = Some(ranking);
    }

    // ── Validate coverage and register in first-seen order ────────────────
    let mut builder = RosterBuilder::new();
    for worker in pending {
        let missing: Vec<Day> = Day::ALL
            .into_iter()
            .filter(|d| worker.by_day[d.index()].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(RosterError::MissingDays { worker: worker.name, missing });
        }

        let by_day = worker.by_day.map(Option::unwrap_or_default);
        builder.add(&worker.name, PreferenceTable::new(by_day))?;
    }

    Ok(builder.build())
}
