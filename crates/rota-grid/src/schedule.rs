//! `Schedule`: the 7 × 3 grid of `ShiftCell`s plus per-worker day tables.
//!
//! # Guards
//!
//! | Operation   | Rejected when                                               |
//! |-------------|-------------------------------------------------------------|
//! | `assign`    | cell at `max_per_shift`; worker already on that day; worker at `max_days_per_week` |
//! | `unassign`  | worker not in that cell                                     |
//! | `reassign`  | worker not working `from_day`; target cell full; worker already on `to_day` (when it differs) |
//!
//! Every guard is checked before anything is written, so a rejected call
//! leaves both views untouched.

use rota_core::{Day, Shift, StaffingLimits, WorkerId};

use crate::{GridError, GridResult};

// ── ShiftCell ─────────────────────────────────────────────────────────────────

/// The workers assigned to one `(day, shift)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftCell {
    day:     Day,
    shift:   Shift,
    /// Assignment-time order; a worker that leaves and returns goes to the back.
    workers: Vec<WorkerId>,
}

impl ShiftCell {
    fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift, workers: Vec::new() }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn contains(&self, worker: WorkerId) -> bool {
        self.workers.contains(&worker)
    }
}

// ── WorkerState ───────────────────────────────────────────────────────────────

/// One worker's side of the dual state.
#[derive(Clone, Debug, Default)]
struct WorkerState {
    days:   [Option<Shift>; Day::COUNT],
    /// Cached count of `Some` entries in `days`.
    worked: usize,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The weekly grid and the per-worker assignment tables, kept in lockstep.
#[derive(Clone, Debug)]
pub struct Schedule {
    cells:   [[ShiftCell; Shift::COUNT]; Day::COUNT],
    workers: Vec<WorkerState>,
    limits:  StaffingLimits,
}

impl Schedule {
    /// An empty schedule for `worker_count` workers (`WorkerId(0..worker_count)`).
    pub fn new(worker_count: usize, limits: StaffingLimits) -> Self {
        Self {
            cells:   Day::ALL.map(|day| Shift::ALL.map(|shift| ShiftCell::new(day, shift))),
            workers: vec![WorkerState::default(); worker_count],
            limits,
        }
    }

    pub fn limits(&self) -> &StaffingLimits {
        &self.limits
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Drop every assignment, keeping the worker count and limits.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.workers.clear();
        }
        self.workers.fill(WorkerState::default());
    }

    // ── Grid reads ────────────────────────────────────────────────────────

    /// The three cells of `day`, indexed by `Shift::index()`.
    pub fn cells_for(&self, day: Day) -> &[ShiftCell; Shift::COUNT] {
        &self.cells[day.index()]
    }

    pub fn cell(&self, day: Day, shift: Shift) -> &ShiftCell {
        &self.cells[day.index()][shift.index()]
    }

    /// All 21 cells, day-major.
    pub fn cells(&self) -> impl Iterator<Item = &ShiftCell> + '_ {
        self.cells.iter().flatten()
    }

    #[inline]
    pub fn size_of(&self, day: Day, shift: Shift) -> usize {
        self.cell(day, shift).len()
    }

    pub fn workers_in(&self, day: Day, shift: Shift) -> &[WorkerId] {
        self.cell(day, shift).workers()
    }

    /// `true` while the cell is below `max_per_shift`.
    #[inline]
    pub fn has_room(&self, day: Day, shift: Shift) -> bool {
        self.size_of(day, shift) < self.limits.max_per_shift
    }

    /// `true` while the cell is below `min_per_shift`.
    #[inline]
    pub fn is_understaffed(&self, day: Day, shift: Shift) -> bool {
        self.size_of(day, shift) < self.limits.min_per_shift
    }

    pub fn total_assignments(&self) -> usize {
        self.workers.iter().map(|w| w.worked).sum()
    }

    // ── Worker reads ──────────────────────────────────────────────────────

    /// The shift `worker` holds on `day`, if any.
    pub fn shift_of(&self, worker: WorkerId, day: Day) -> Option<Shift> {
        self.workers.get(worker.index()).and_then(|w| w.days[day.index()])
    }

    #[inline]
    pub fn is_working_on(&self, worker: WorkerId, day: Day) -> bool {
        self.shift_of(worker, day).is_some()
    }

    pub fn days_worked(&self, worker: WorkerId) -> usize {
        self.workers.get(worker.index()).map_or(0, |w| w.worked)
    }

    /// `true` while `worker` is below the weekly cap.  Unknown ids never can.
    pub fn can_work(&self, worker: WorkerId) -> bool {
        self.workers
            .get(worker.index())
            .is_some_and(|w| w.worked < self.limits.max_days_per_week)
    }

    /// Snapshot of the days `worker` is assigned, in week order.
    pub fn assigned_days(&self, worker: WorkerId) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|&d| self.is_working_on(worker, d))
            .collect()
    }

    // ── Paired mutations ──────────────────────────────────────────────────

    /// Put `worker` on `shift` for `day`.
    pub fn assign(&mut self, worker: WorkerId, day: Day, shift: Shift) -> GridResult<()> {
        let state = self.state(worker)?;
        if let Some(current) = state.days[day.index()] {
            return Err(GridError::AlreadyWorking { worker, day, shift: current });
        }
        if state.worked >= self.limits.max_days_per_week {
            return Err(GridError::WeeklyCapReached { worker, cap: self.limits.max_days_per_week });
        }
        if !self.has_room(day, shift) {
            return Err(GridError::CellFull { day, shift, capacity: self.limits.max_per_shift });
        }

        self.insert(worker, day, shift);
        Ok(())
    }

    /// Take `worker` off `shift` for `day`.
    pub fn unassign(&mut self, worker: WorkerId, day: Day, shift: Shift) -> GridResult<()> {
        let state = self.state(worker)?;
        if state.days[day.index()] != Some(shift) {
            return Err(GridError::NotAssigned { worker, day, shift });
        }

        self.remove(worker, day, shift);
        Ok(())
    }

    /// Move `worker` from whatever they work on `from_day` to `to_shift` on
    /// `to_day`, as one step.  Returns the shift they left.
    ///
    /// The weekly day count is unchanged by a move, so the weekly cap is not
    /// consulted.  Moving a worker onto the cell they already occupy is a
    /// no-op.
    pub fn reassign(
        &mut self,
        worker:   WorkerId,
        from_day: Day,
        to_day:   Day,
        to_shift: Shift,
    ) -> GridResult<Shift> {
        let state = self.state(worker)?;
        let Some(from_shift) = state.days[from_day.index()] else {
            return Err(GridError::NotWorking { worker, day: from_day });
        };
        if from_day == to_day && from_shift == to_shift {
            return Ok(from_shift);
        }
        if from_day != to_day {
            if let Some(current) = state.days[to_day.index()] {
                return Err(GridError::AlreadyWorking { worker, day: to_day, shift: current });
            }
        }
        if !self.has_room(to_day, to_shift) {
            return Err(GridError::CellFull {
                day:      to_day,
                shift:    to_shift,
                capacity: self.limits.max_per_shift,
            });
        }

        self.remove(worker, from_day, from_shift);
        self.insert(worker, to_day, to_shift);
        Ok(from_shift)
    }

    // ── Consistency ───────────────────────────────────────────────────────

    /// Re-derive every structural invariant from both views.
    ///
    /// Checks cell ceilings, no duplicate workers in a cell, the weekly cap,
    /// the cached day counters, and that the grid view and the worker view
    /// describe exactly the same set of `(worker, day, shift)` triples.
    pub fn check_invariants(&self) -> GridResult<()> {
        let inconsistent = |msg: String| Err(GridError::Inconsistent(msg));

        for cell in self.cells() {
            if cell.len() > self.limits.max_per_shift {
                return inconsistent(format!(
                    "{} on {} holds {} workers (max {})",
                    cell.shift, cell.day, cell.len(), self.limits.max_per_shift
                ));
            }
            for (i, &worker) in cell.workers.iter().enumerate() {
                if cell.workers[..i].contains(&worker) {
                    return inconsistent(format!("{worker} listed twice in {} on {}", cell.shift, cell.day));
                }
                if self.shift_of(worker, cell.day) != Some(cell.shift) {
                    return inconsistent(format!(
                        "{worker} is in {} on {} but their table says {:?}",
                        cell.shift,
                        cell.day,
                        self.shift_of(worker, cell.day)
                    ));
                }
            }
        }

        for (i, state) in self.workers.iter().enumerate() {
            let worker = WorkerId(i as u32);
            let counted = state.days.iter().flatten().count();
            if counted != state.worked {
                return inconsistent(format!(
                    "{worker} works {counted} days but the counter says {}",
                    state.worked
                ));
            }
            if counted > self.limits.max_days_per_week {
                return inconsistent(format!(
                    "{worker} works {counted} days (cap {})",
                    self.limits.max_days_per_week
                ));
            }
            for day in Day::ALL {
                if let Some(shift) = state.days[day.index()] {
                    if !self.cell(day, shift).contains(worker) {
                        return inconsistent(format!(
                            "{worker}'s table says {shift} on {day} but the cell does not list them"
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn state(&self, worker: WorkerId) -> GridResult<&WorkerState> {
        self.workers
            .get(worker.index())
            .ok_or(GridError::UnknownWorker(worker))
    }

    /// Unchecked paired insert.  Callers have validated every guard.
    fn insert(&mut self, worker: WorkerId, day: Day, shift: Shift) {
        self.cells[day.index()][shift.index()].workers.push(worker);
        let state = &mut self.workers[worker.index()];
        state.days[day.index()] = Some(shift);
        state.worked += 1;
    }

    /// Unchecked paired remove.  Callers have validated every guard.
    fn remove(&mut self, worker: WorkerId, day: Day, shift: Shift) {
        let cell = &mut self.cells[day.index()][shift.index()];
        if let Some(pos) = cell.workers.iter().position(|&w| w == worker) {
            cell.workers.remove(pos);
        }
        let state = &mut self.workers[worker.index()];
        state.days[day.index()] = None;
        state.worked -= 1;
    }
}
