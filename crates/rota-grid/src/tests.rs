//! Unit tests for rota-grid.

use rota_core::{Day, Shift, StaffingLimits, WorkerId};

use crate::Schedule;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(workers: usize) -> Schedule {
    Schedule::new(workers, StaffingLimits::default())
}

fn w(n: u32) -> WorkerId {
    WorkerId(n)
}

// ── assign / unassign ─────────────────────────────────────────────────────────

#[cfg(test)]
mod assign {
    use super::*;
    use crate::GridError;

    #[test]
    fn assign_updates_both_views() {
        let mut s = grid(2);
        s.assign(w(0), Day::Monday, Shift::Evening).unwrap();

        assert_eq!(s.workers_in(Day::Monday, Shift::Evening), &[w(0)]);
        assert_eq!(s.shift_of(w(0), Day::Monday), Some(Shift::Evening));
        assert_eq!(s.days_worked(w(0)), 1);
        assert_eq!(s.size_of(Day::Monday, Shift::Evening), 1);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn cell_keeps_assignment_order() {
        let mut s = grid(3);
        for n in [2, 0, 1] {
            s.assign(w(n), Day::Friday, Shift::Morning).unwrap();
        }
        assert_eq!(s.workers_in(Day::Friday, Shift::Morning), &[w(2), w(0), w(1)]);
    }

    #[test]
    fn full_cell_rejected() {
        let mut s = grid(4);
        for n in 0..3 {
            s.assign(w(n), Day::Monday, Shift::Morning).unwrap();
        }
        let err = s.assign(w(3), Day::Monday, Shift::Morning).unwrap_err();
        assert_eq!(err, GridError::CellFull { day: Day::Monday, shift: Shift::Morning, capacity: 3 });
        assert_eq!(s.size_of(Day::Monday, Shift::Morning), 3);
        assert!(!s.is_working_on(w(3), Day::Monday));
    }

    #[test]
    fn second_shift_same_day_rejected() {
        let mut s = grid(1);
        s.assign(w(0), Day::Tuesday, Shift::Morning).unwrap();
        let err = s.assign(w(0), Day::Tuesday, Shift::Evening).unwrap_err();
        assert!(matches!(err, GridError::AlreadyWorking { shift: Shift::Morning, .. }));
        assert!(s.workers_in(Day::Tuesday, Shift::Evening).is_empty());
    }

    #[test]
    fn weekly_cap_enforced() {
        let mut s = grid(1);
        for day in &Day::ALL[..5] {
            s.assign(w(0), *day, Shift::Morning).unwrap();
        }
        assert!(!s.can_work(w(0)));
        let err = s.assign(w(0), Day::Saturday, Shift::Morning).unwrap_err();
        assert_eq!(err, GridError::WeeklyCapReached { worker: w(0), cap: 5 });
        assert_eq!(s.days_worked(w(0)), 5);
    }

    #[test]
    fn unknown_worker_rejected() {
        let mut s = grid(1);
        assert_eq!(
            s.assign(w(7), Day::Monday, Shift::Morning),
            Err(GridError::UnknownWorker(w(7)))
        );
        assert!(!s.can_work(w(7)));
        assert_eq!(s.days_worked(w(7)), 0);
    }

    #[test]
    fn unassign_reverses_assign() {
        let mut s = grid(2);
        s.assign(w(0), Day::Sunday, Shift::Afternoon).unwrap();
        s.assign(w(1), Day::Sunday, Shift::Afternoon).unwrap();
        s.unassign(w(0), Day::Sunday, Shift::Afternoon).unwrap();

        assert_eq!(s.workers_in(Day::Sunday, Shift::Afternoon), &[w(1)]);
        assert_eq!(s.shift_of(w(0), Day::Sunday), None);
        assert_eq!(s.days_worked(w(0)), 0);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn unassign_wrong_cell_rejected() {
        let mut s = grid(1);
        s.assign(w(0), Day::Monday, Shift::Morning).unwrap();
        let err = s.unassign(w(0), Day::Monday, Shift::Evening).unwrap_err();
        assert_eq!(err, GridError::NotAssigned { worker: w(0), day: Day::Monday, shift: Shift::Evening });
        assert_eq!(s.shift_of(w(0), Day::Monday), Some(Shift::Morning));
    }

    #[test]
    fn custom_limits_apply() {
        let limits = StaffingLimits { min_per_shift: 1, max_per_shift: 1, max_days_per_week: 2 };
        let mut s = Schedule::new(2, limits);
        s.assign(w(0), Day::Monday, Shift::Morning).unwrap();
        assert!(s.assign(w(1), Day::Monday, Shift::Morning).is_err());
        assert!(!s.is_understaffed(Day::Monday, Shift::Morning));
    }
}

// ── reassign ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reassign {
    use super::*;
    use crate::GridError;

    #[test]
    fn same_day_move() {
        let mut s = grid(1);
        s.assign(w(0), Day::Monday, Shift::Afternoon).unwrap();
        let left = s.reassign(w(0), Day::Monday, Day::Monday, Shift::Morning).unwrap();

        assert_eq!(left, Shift::Afternoon);
        assert_eq!(s.shift_of(w(0), Day::Monday), Some(Shift::Morning));
        assert!(s.workers_in(Day::Monday, Shift::Afternoon).is_empty());
        assert_eq!(s.days_worked(w(0)), 1);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn next_day_move_keeps_day_count() {
        let mut s = grid(1);
        s.assign(w(0), Day::Monday, Shift::Afternoon).unwrap();
        s.reassign(w(0), Day::Monday, Day::Tuesday, Shift::Evening).unwrap();

        assert_eq!(s.assigned_days(w(0)), vec![Day::Tuesday]);
        assert_eq!(s.shift_of(w(0), Day::Tuesday), Some(Shift::Evening));
        assert_eq!(s.days_worked(w(0)), 1);
    }

    #[test]
    fn move_allowed_at_weekly_cap() {
        let mut s = grid(1);
        for day in &Day::ALL[..5] {
            s.assign(w(0), *day, Shift::Morning).unwrap();
        }
        s.reassign(w(0), Day::Friday, Day::Saturday, Shift::Morning).unwrap();
        assert_eq!(s.days_worked(w(0)), 5);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn move_into_full_cell_leaves_state_untouched() {
        let mut s = grid(4);
        for n in 0..3 {
            s.assign(w(n), Day::Monday, Shift::Morning).unwrap();
        }
        s.assign(w(3), Day::Monday, Shift::Evening).unwrap();

        let err = s.reassign(w(3), Day::Monday, Day::Monday, Shift::Morning).unwrap_err();
        assert!(matches!(err, GridError::CellFull { .. }));
        assert_eq!(s.shift_of(w(3), Day::Monday), Some(Shift::Evening));
        assert_eq!(s.workers_in(Day::Monday, Shift::Evening), &[w(3)]);
    }

    #[test]
    fn move_onto_worked_day_rejected() {
        let mut s = grid(1);
        s.assign(w(0), Day::Monday, Shift::Morning).unwrap();
        s.assign(w(0), Day::Tuesday, Shift::Morning).unwrap();
        let err = s.reassign(w(0), Day::Monday, Day::Tuesday, Shift::Evening).unwrap_err();
        assert!(matches!(err, GridError::AlreadyWorking { day: Day::Tuesday, .. }));
        assert_eq!(s.assigned_days(w(0)), vec![Day::Monday, Day::Tuesday]);
    }

    #[test]
    fn move_from_unworked_day_rejected() {
        let mut s = grid(1);
        assert_eq!(
            s.reassign(w(0), Day::Monday, Day::Tuesday, Shift::Morning),
            Err(GridError::NotWorking { worker: w(0), day: Day::Monday })
        );
    }

    #[test]
    fn move_to_same_cell_is_noop() {
        let mut s = grid(1);
        s.assign(w(0), Day::Monday, Shift::Morning).unwrap();
        s.reassign(w(0), Day::Monday, Day::Monday, Shift::Morning).unwrap();
        assert_eq!(s.workers_in(Day::Monday, Shift::Morning), &[w(0)]);
    }
}

// ── Reads and housekeeping ────────────────────────────────────────────────────

#[cfg(test)]
mod reads {
    use super::*;

    #[test]
    fn empty_grid_is_understaffed_everywhere() {
        let s = grid(0);
        assert_eq!(s.cells().count(), 21);
        assert!(s.cells().all(|c| s.is_understaffed(c.day(), c.shift())));
        assert_eq!(s.total_assignments(), 0);
    }

    #[test]
    fn cells_for_is_indexed_by_shift() {
        let s = grid(0);
        let cells = s.cells_for(Day::Wednesday);
        for shift in Shift::ALL {
            assert_eq!(cells[shift.index()].shift(), shift);
            assert_eq!(cells[shift.index()].day(), Day::Wednesday);
        }
    }

    #[test]
    fn assigned_days_are_week_ordered() {
        let mut s = grid(1);
        s.assign(w(0), Day::Sunday, Shift::Morning).unwrap();
        s.assign(w(0), Day::Monday, Shift::Evening).unwrap();
        s.assign(w(0), Day::Thursday, Shift::Afternoon).unwrap();
        assert_eq!(s.assigned_days(w(0)), vec![Day::Monday, Day::Thursday, Day::Sunday]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = grid(2);
        s.assign(w(0), Day::Monday, Shift::Morning).unwrap();
        s.assign(w(1), Day::Friday, Shift::Evening).unwrap();
        s.clear();

        assert_eq!(s.total_assignments(), 0);
        assert!(s.cells().all(|c| c.is_empty()));
        assert_eq!(s.worker_count(), 2);
        assert!(s.check_invariants().is_ok());
    }
}
