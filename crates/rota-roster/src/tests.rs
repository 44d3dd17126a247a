//! Unit tests for rota-roster.

use rota_core::{Day, Shift};

use crate::{PreferenceTable, ShiftRanking};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rank(a: Shift, b: Shift, c: Shift) -> ShiftRanking {
    ShiftRanking::new([a, b, c]).unwrap()
}

/// A full week of rows for `name` with the same ranking every day.
fn week_rows(name: &str, ranking: &str) -> String {
    Day::ALL
        .iter()
        .map(|d| format!("{name},{d},{ranking}\n"))
        .collect()
}

// ── ShiftRanking ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ranking {
    use super::*;
    use rota_core::Shift::*;

    #[test]
    fn parses_comma_separated_form() {
        let r: ShiftRanking = "Evening, morning ,AFTERNOON".parse().unwrap();
        assert_eq!(r.as_array(), [Evening, Morning, Afternoon]);
        assert_eq!(r.top(), Evening);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("morning, afternoon".parse::<ShiftRanking>().is_err());
        assert!("morning, afternoon, evening, morning".parse::<ShiftRanking>().is_err());
    }

    #[test]
    fn rejects_unknown_label() {
        assert!("morning, night, evening".parse::<ShiftRanking>().is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!("morning, morning, evening".parse::<ShiftRanking>().is_err());
        assert!(ShiftRanking::new([Evening, Afternoon, Evening]).is_err());
    }

    #[test]
    fn default_is_morning_afternoon_evening() {
        assert_eq!(ShiftRanking::default().as_array(), [Morning, Afternoon, Evening]);
        assert_eq!(ShiftRanking::default().to_string(), "morning, afternoon, evening");
    }

    #[test]
    fn rank_of_each_shift() {
        let r = rank(Afternoon, Evening, Morning);
        assert_eq!(r.rank_of(Afternoon), 0);
        assert_eq!(r.rank_of(Evening), 1);
        assert_eq!(r.rank_of(Morning), 2);
    }

    #[test]
    fn preferred_over_stops_before_shift() {
        let r = rank(Afternoon, Evening, Morning);
        assert_eq!(r.preferred_over(Morning).collect::<Vec<_>>(), vec![Afternoon, Evening]);
        assert_eq!(r.preferred_over(Evening).collect::<Vec<_>>(), vec![Afternoon]);
        assert_eq!(r.preferred_over(Afternoon).count(), 0);
    }
}

// ── PreferenceTable ───────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;
    use rota_core::Shift::*;

    #[test]
    fn uniform_applies_to_every_day() {
        let r = rank(Evening, Afternoon, Morning);
        let table = PreferenceTable::uniform(r);
        for day in Day::ALL {
            assert_eq!(*table.for_day(day), r);
        }
    }

    #[test]
    fn with_day_overrides_one_day() {
        let table = PreferenceTable::default().with_day(Day::Friday, rank(Evening, Morning, Afternoon));
        assert_eq!(table.for_day(Day::Friday).top(), Evening);
        assert_eq!(table.for_day(Day::Thursday).top(), Morning);
    }

    #[test]
    fn iter_is_week_ordered() {
        let days: Vec<Day> = PreferenceTable::default().iter().map(|(d, _)| d).collect();
        assert_eq!(days, Day::ALL.to_vec());
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use rota_core::WorkerId;

    use crate::{PreferenceTable, RosterBuilder, RosterError};

    #[test]
    fn ids_follow_registration_order() {
        let mut b = RosterBuilder::new();
        let ann = b.add("Ann", PreferenceTable::default()).unwrap();
        let bob = b.add("Bob", PreferenceTable::default()).unwrap();
        let roster = b.build();

        assert_eq!(ann, WorkerId(0));
        assert_eq!(bob, WorkerId(1));
        assert_eq!(roster.ids().collect::<Vec<_>>(), vec![ann, bob]);
        assert_eq!(roster[bob].name, "Bob");
        assert_eq!(roster.find("Ann"), Some(ann));
        assert_eq!(roster.name(WorkerId(9)), None);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut b = RosterBuilder::new();
        b.add("Ann", PreferenceTable::default()).unwrap();
        let err = b.add(" Ann ", PreferenceTable::default()).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateWorker(ref n) if n == "Ann"));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn empty_name_rejected() {
        let mut b = RosterBuilder::new();
        assert!(matches!(b.add("   ", PreferenceTable::default()), Err(RosterError::EmptyName)));
    }

    #[test]
    fn chaining_builder() {
        let roster = RosterBuilder::new()
            .with("Ann", PreferenceTable::default())
            .and_then(|b| b.with("Bob", PreferenceTable::default()))
            .unwrap()
            .build();
        assert_eq!(roster.len(), 2);
        assert!(!roster.is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_roster_reader, RosterError};
    use rota_core::WorkerId;

    const HEADER: &str = "worker,day,first,second,third\n";

    #[test]
    fn loads_workers_in_first_seen_order() {
        let csv = format!(
            "{HEADER}{}{}",
            week_rows("Bob", "evening,morning,afternoon"),
            week_rows("Ann", "morning,afternoon,evening"),
        );
        let roster = load_roster_reader(Cursor::new(csv)).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.name(WorkerId(0)), Some("Bob"));
        assert_eq!(roster[WorkerId(0)].preferences.for_day(Day::Sunday).top(), Shift::Evening);
        assert_eq!(roster[WorkerId(1)].preferences.for_day(Day::Monday).top(), Shift::Morning);
    }

    #[test]
    fn interleaved_rows_are_grouped_per_worker() {
        let mut csv = HEADER.to_string();
        for day in Day::ALL {
            csv.push_str(&format!("Ann,{day},afternoon,evening,morning\n"));
            csv.push_str(&format!("Bob,{day},morning,evening,afternoon\n"));
        }
        let roster = load_roster_reader(csv.as_bytes()).unwrap();
        assert_eq!(roster.name(WorkerId(0)), Some("Ann"));
        assert_eq!(roster[WorkerId(1)].preferences.for_day(Day::Wednesday).top(), Shift::Morning);
    }

    #[test]
    fn labels_are_case_insensitive_and_trimmed() {
        let mut csv = HEADER.to_string();
        for day in Day::ALL {
            csv.push_str(&format!(" Ann , {} , EVENING , Morning , afternoon\n", day.as_str().to_uppercase()));
        }
        let roster = load_roster_reader(csv.as_bytes()).unwrap();
        assert_eq!(roster.name(WorkerId(0)), Some("Ann"));
        assert_eq!(roster[WorkerId(0)].preferences.for_day(Day::Tuesday).top(), Shift::Evening);
    }

    #[test]
    fn missing_day_is_error() {
        let csv = format!("{HEADER}Ann,Monday,morning,afternoon,evening\n");
        let err = load_roster_reader(csv.as_bytes()).unwrap_err();
        match err {
            RosterError::MissingDays { worker, missing } => {
                assert_eq!(worker, "Ann");
                assert_eq!(missing.len(), 6);
                assert_eq!(missing[0], Day::Tuesday);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_day_is_error() {
        let csv = format!(
            "{HEADER}{}Ann,Monday,evening,afternoon,morning\n",
            week_rows("Ann", "morning,afternoon,evening"),
        );
        assert!(matches!(
            load_roster_reader(csv.as_bytes()),
            Err(RosterError::DuplicateDay { day: Day::Monday, .. })
        ));
    }

    #[test]
    fn repeated_shift_is_error() {
        let csv = format!("{HEADER}{}", week_rows("Ann", "morning,morning,evening"));
        assert!(matches!(
            load_roster_reader(csv.as_bytes()),
            Err(RosterError::InvalidRanking { .. })
        ));
    }

    #[test]
    fn unknown_day_is_error() {
        let csv = format!("{HEADER}Ann,Someday,morning,afternoon,evening\n");
        assert!(matches!(load_roster_reader(csv.as_bytes()), Err(RosterError::Core(_))));
    }

    #[test]
    fn empty_input_gives_empty_roster() {
        let roster = load_roster_reader(HEADER.as_bytes()).unwrap();
        assert!(roster.is_empty());
    }
}
