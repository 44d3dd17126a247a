//! The `ScheduleWriter` trait and the function that drives it.

use rota_engine::ScheduleOutcome;

use crate::{AssignmentRow, OutputResult, WarningRow};

/// Trait implemented by output backends.
pub trait ScheduleWriter {
    /// Write one occupied slot of the grid.
    fn write_assignment(&mut self, row: &AssignmentRow) -> OutputResult<()>;

    /// Write one unmet staffing floor.
    fn write_warning(&mut self, row: &WarningRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every assignment (week order, shift order, slot order) and every
/// warning of `outcome`, then finish the writer.
pub fn write_outcome<W: ScheduleWriter>(writer: &mut W, outcome: &ScheduleOutcome) -> OutputResult<()> {
    for cell in outcome.schedule.cells() {
        for (slot, name) in outcome.names_in(cell.day(), cell.shift()).into_iter().enumerate() {
            writer.write_assignment(&AssignmentRow {
                day:    cell.day(),
                shift:  cell.shift(),
                slot,
                worker: name.to_owned(),
            })?;
        }
    }
    for warning in &outcome.warnings {
        writer.write_warning(&WarningRow::from(warning))?;
    }
    writer.finish()
}
