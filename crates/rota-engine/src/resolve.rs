//! Phase ③: single-pass conflict resolution.

use tracing::debug;

use rota_core::Shuffler;

use crate::{EngineResult, MoveKind, Reassignment, Scheduler, SchedulerObserver};

impl<S: Shuffler> Scheduler<S> {
    /// Move workers toward their top-ranked shifts where capacity allows.
    ///
    /// For each worker (registration order) and each day they work (a
    /// snapshot taken before any move, in week order), if the assigned
    /// shift is not their first choice:
    ///
    /// 1. **Same-day upgrade**: the best-ranked shift above the current one
    ///    whose cell has room.
    /// 2. **Next-day move**: only if no upgrade exists: when there is a
    ///    following day, the worker is under the weekly cap and free that
    ///    day, and the cell of their top choice for that day has room, the
    ///    assignment moves there.
    ///
    /// At most one remedy per (worker, day); otherwise the assignment
    /// stands.  There is no second pass, and a cell vacated by a move is not
    /// backfilled again.
    pub fn resolve_conflicts<O: SchedulerObserver>(
        &mut self,
        observer: &mut O,
    ) -> EngineResult<Vec<Reassignment>> {
        let roster = &self.roster;
        let schedule = &mut self.schedule;
        let mut moves = Vec::new();

        for (worker, entry) in roster.iter() {
            for day in schedule.assigned_days(worker) {
                let Some(assigned) = schedule.shift_of(worker, day) else {
                    continue;
                };
                let ranking = entry.preferences.for_day(day);
                if assigned == ranking.top() {
                    continue;
                }

                let upgrade = ranking
                    .preferred_over(assigned)
                    .find(|&better| schedule.has_room(day, better));

                let applied = if let Some(better) = upgrade {
                    schedule.reassign(worker, day, day, better)?;
                    Some(Reassignment {
                        worker,
                        from: (day, assigned),
                        to:   (day, better),
                        kind: MoveKind::SameDayUpgrade,
                    })
                } else {
                    match day.next() {
                        Some(next)
                            if schedule.can_work(worker)
                                && !schedule.is_working_on(worker, next)
                                && schedule.has_room(next, entry.preferences.for_day(next).top()) =>
                        {
                            let top = entry.preferences.for_day(next).top();
                            schedule.reassign(worker, day, next, top)?;
                            Some(Reassignment {
                                worker,
                                from: (day, assigned),
                                to:   (next, top),
                                kind: MoveKind::NextDayMove,
                            })
                        }
                        _ => None,
                    }
                };

                if let Some(reassignment) = applied {
                    debug!(
                        worker = %entry.name,
                        from = ?reassignment.from,
                        to = ?reassignment.to,
                        kind = ?reassignment.kind,
                        "reassigned"
                    );
                    observer.on_reassigned(&reassignment);
                    moves.push(reassignment);
                }
            }
        }

        debug!(moves = moves.len(), "resolution phase done");
        Ok(moves)
    }
}
