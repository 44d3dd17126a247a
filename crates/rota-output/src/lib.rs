//! `rota-output`: renderings of a finished [`ScheduleOutcome`].
//!
//! | Function / type   | Produces                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`render_text`]   | the day-by-day listing printed to the console          |
//! | [`CsvWriter`]     | `schedule.csv`, `staffing_warnings.csv` in a directory |
//!
//! Writers implement [`ScheduleWriter`] and are driven by [`write_outcome`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rota_output::{CsvWriter, render_text, write_outcome};
//!
//! let outcome = scheduler.run(&mut NoopObserver)?;
//! print!("{}", render_text(&outcome));
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! write_outcome(&mut writer, &outcome)?;
//! ```
//!
//! [`ScheduleOutcome`]: rota_engine::ScheduleOutcome

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{AssignmentRow, WarningRow};
pub use text::render_text;
pub use writer::{ScheduleWriter, write_outcome};
