use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "rota",
    about = "Weekly shift scheduler",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a week's schedule from a preferences CSV.
    ///
    /// The CSV has one row per worker per day:
    /// `worker,day,first,second,third`.  Workers are scheduled in the order
    /// their first row appears.
    Run {
        /// Preferences CSV
        #[arg(short, long)]
        preferences: PathBuf,
        /// Seed for the backfill shuffle (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Also write schedule.csv and staffing_warnings.csv into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Staffing floor per shift
        #[arg(long)]
        min: Option<usize>,
        /// Staffing ceiling per shift
        #[arg(long)]
        max: Option<usize>,
        /// Most days any one worker may work in the week
        #[arg(long)]
        max_days: Option<usize>,
    },
    /// Print a preferences CSV for the named workers with the default
    /// ranking (morning, afternoon, evening) on every day.
    Template {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rota=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { preferences, seed, out, min, max, max_days } => {
            let limits = commands::run::limits(min, max, max_days);
            commands::run::run(&preferences, seed, out.as_deref(), limits)
        }
        Commands::Template { names } => {
            commands::template::template(&names, std::io::stdout().lock())
        }
    }
}
