//! Phase ②: minimum-staffing backfill.

use tracing::{debug, warn};

use rota_core::{Day, Shift, Shuffler, WorkerId};

use crate::{EngineResult, Scheduler, SchedulerObserver, StaffingWarning};

impl<S: Shuffler> Scheduler<S> {
    /// Top up every cell below `min_per_shift`, ignoring preferences.
    ///
    /// Cells are visited day by day (Monday → Sunday), shifts in layout
    /// order.  For an understaffed cell the candidate pool is every worker
    /// who is under the weekly cap and free that day; the pool is shuffled
    /// and candidates are added one at a time until the shortfall is covered
    /// or the cell is full.  A cell still below the floor afterwards yields a
    /// [`StaffingWarning`]; that is the only outcome, never an error.
    pub fn backfill_minimum_staff<O: SchedulerObserver>(
        &mut self,
        observer: &mut O,
    ) -> EngineResult<Vec<StaffingWarning>> {
        let minimum = self.schedule.limits().min_per_shift;
        let mut warnings = Vec::new();

        for day in Day::ALL {
            for shift in Shift::ALL {
                if !self.schedule.is_understaffed(day, shift) {
                    continue;
                }
                let needed = minimum - self.schedule.size_of(day, shift);
                let added = self.fill_cell(day, shift, needed)?;
                if added > 0 {
                    debug!(%day, %shift, added, "backfilled");
                }

                if self.schedule.is_understaffed(day, shift) {
                    let warning = StaffingWarning {
                        day,
                        shift,
                        staffed: self.schedule.size_of(day, shift),
                        minimum,
                    };
                    warn!(%day, %shift, staffed = warning.staffed, minimum, "{warning}");
                    observer.on_understaffed(&warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(warnings)
    }

    /// Add up to `needed` shuffled candidates to `(day, shift)`.
    fn fill_cell(&mut self, day: Day, shift: Shift, needed: usize) -> EngineResult<usize> {
        let schedule = &mut self.schedule;

        let mut candidates: Vec<WorkerId> = self
            .roster
            .ids()
            .filter(|&w| schedule.can_work(w) && !schedule.is_working_on(w, day))
            .collect();
        self.shuffler.shuffle(&mut candidates);

        let mut added = 0;
        for candidate in candidates {
            if added >= needed || !schedule.has_room(day, shift) {
                break;
            }
            schedule.assign(candidate, day, shift)?;
            added += 1;
        }
        Ok(added)
    }
}
