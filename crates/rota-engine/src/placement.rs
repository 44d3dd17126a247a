//! Phase ①: greedy preference placement.

use tracing::debug;

use rota_core::{Day, Shuffler};

use crate::{EngineResult, Scheduler};

impl<S: Shuffler> Scheduler<S> {
    /// Give every worker their best available shift on every day.
    ///
    /// Workers are visited in registration order and days Monday → Sunday,
    /// so earlier workers get first pick of capacity-limited cells.  For each
    /// (worker, day) the ranking is scanned best first and the first shift
    /// with room is taken, provided the worker is still under the weekly
    /// cap.  If nothing fits, the worker stays off that day.
    ///
    /// Returns the number of assignments made.
    pub fn place_preferences(&mut self) -> EngineResult<usize> {
        let roster = &self.roster;
        let schedule = &mut self.schedule;
        let mut placed = 0;

        for (worker, entry) in roster.iter() {
            for day in Day::ALL {
                let ranking = entry.preferences.for_day(day);
                for shift in ranking.iter() {
                    if schedule.is_working_on(worker, day)
                        || !schedule.can_work(worker)
                        || !schedule.has_room(day, shift)
                    {
                        continue;
                    }
                    schedule.assign(worker, day, shift)?;
                    placed += 1;
                    debug!(worker = %entry.name, %day, %shift, rank = ranking.rank_of(shift), "placed");
                    break;
                }
            }
        }

        debug!(placed, "placement phase done");
        Ok(placed)
    }
}
