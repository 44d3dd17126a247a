use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use rota_core::StaffingLimits;
use rota_engine::{NoopObserver, SchedulerBuilder};
use rota_output::{CsvWriter, render_text, write_outcome};

/// Default limits with any flags given on the command line applied on top.
pub fn limits(min: Option<usize>, max: Option<usize>, max_days: Option<usize>) -> StaffingLimits {
    let defaults = StaffingLimits::default();
    StaffingLimits {
        min_per_shift:     min.unwrap_or(defaults.min_per_shift),
        max_per_shift:     max.unwrap_or(defaults.max_per_shift),
        max_days_per_week: max_days.unwrap_or(defaults.max_days_per_week),
    }
}

pub fn run(preferences: &Path, seed: Option<u64>, out: Option<&Path>, limits: StaffingLimits) -> Result<()> {
    let roster = rota_roster::load_roster_csv(preferences)
        .with_context(|| format!("loading preferences from {}", preferences.display()))?;
    info!(workers = roster.len(), path = %preferences.display(), "roster loaded");

    let mut builder = SchedulerBuilder::new(roster).limits(limits);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mut scheduler = builder.build().context("invalid staffing limits")?;
    let outcome = scheduler.run(&mut NoopObserver)?;

    print!("{}", render_text(&outcome));

    if let Some(dir) = out {
        let mut writer = CsvWriter::new(dir)
            .with_context(|| format!("creating output files in {}", dir.display()))?;
        write_outcome(&mut writer, &outcome)?;
        info!(dir = %dir.display(), "schedule written");
    }
    Ok(())
}
