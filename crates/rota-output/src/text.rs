//! Console rendering of a finished schedule.

use std::fmt;

use rota_core::{Day, Shift};
use rota_engine::ScheduleOutcome;

const EMPTY_CELL: &str = "No employees assigned";

/// Render the grid day by day:
///
/// ```text
/// Final Weekly Schedule:
/// Monday:
///   Morning: Ann, Bob
///   Afternoon: No employees assigned
///   Evening: Cy
///
/// Tuesday:
/// ...
/// ```
pub fn render_text(outcome: &ScheduleOutcome) -> String {
    WeeklyListing(outcome).to_string()
}

struct WeeklyListing<'a>(&'a ScheduleOutcome);

impl fmt::Display for WeeklyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Weekly Schedule:")?;
        for day in Day::ALL {
            writeln!(f, "{day}:")?;
            for shift in Shift::ALL {
                let names = self.0.names_in(day, shift);
                if names.is_empty() {
                    writeln!(f, "  {}: {EMPTY_CELL}", shift.label())?;
                } else {
                    writeln!(f, "  {}: {}", shift.label(), names.join(", "))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
