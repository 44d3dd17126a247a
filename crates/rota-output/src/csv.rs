//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedule.csv`
//! - `staffing_warnings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AssignmentRow, OutputResult, WarningRow};
use crate::writer::ScheduleWriter;

/// Writes a schedule to two CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    warnings:    Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open (or truncate) the two CSV
    /// files in it and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut assignments = Writer::from_path(dir.join("schedule.csv"))?;
        assignments.write_record(["day", "shift", "slot", "worker"])?;

        let mut warnings = Writer::from_path(dir.join("staffing_warnings.csv"))?;
        warnings.write_record(["day", "shift", "staffed", "minimum"])?;

        Ok(Self {
            assignments,
            warnings,
            finished: false,
        })
    }
}

impl ScheduleWriter for CsvWriter {
    fn write_assignment(&mut self, row: &AssignmentRow) -> OutputResult<()> {
        self.assignments.write_record(&[
            row.day.to_string(),
            row.shift.to_string(),
            row.slot.to_string(),
            row.worker.clone(),
        ])?;
        Ok(())
    }

    fn write_warning(&mut self, row: &WarningRow) -> OutputResult<()> {
        self.warnings.write_record(&[
            row.day.to_string(),
            row.shift.to_string(),
            row.staffed.to_string(),
            row.minimum.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.warnings.flush()?;
        Ok(())
    }
}
