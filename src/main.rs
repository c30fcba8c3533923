use anyhow::Result;
use clap::{Parser, Subcommand};
use replan::cli::{commands, ScopeArg};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "replan")]
#[command(about = "Holiday rescheduling for fixed-layout delivery workbooks")]
#[command(long_about = "Replan - Holiday delivery rescheduling

Moves deliveries scheduled on a holiday one delivery day earlier, substitutes
the destination day's weekday code, writes an observation note on every moved
row, and reports the affected deliveries grouped by carrier and chain.

COMMANDS:
  reschedule  - Move holiday-column deliveries one day earlier
  report      - Summarize scheduled deliveries without modifying the file

EXAMPLES:
  replan reschedule calendar.xlsx --day 15
  replan reschedule calendar.xlsx --day 15 -o replanned.xlsx --scope period
  replan report calendar.xlsx --json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Move holiday-column deliveries one day earlier.

The workbook must contain the scheduling sheet with its fixed layout: day
numbers in row 3 of the delivery columns (AI-AN), weekday initials in row 6,
delivery records from row 8 down. The day you pass must match one of the
row-3 day headers exactly.

WHAT CHANGES:
  For every row whose holiday-column cell carries a task code (1-6), the
  previous delivery column receives that column's weekday number, the
  holiday cell is cleared, and column CT gets an observation note. All other
  cells are left as they are.

WHAT ABORTS (input file untouched):
  - The day does not match any delivery-column header
  - The holiday falls on the first delivery column (nothing to anticipate
    into)

EXAMPLES:
  replan reschedule calendar.xlsx --day 15
  replan reschedule calendar.xlsx --day 15 -o replanned.xlsx
  replan reschedule calendar.xlsx --day 15 --scope period --json")]
    /// Move holiday-column deliveries one day earlier
    Reschedule {
        /// Path to the scheduling workbook (.xlsx)
        input: PathBuf,

        /// Calendar day declared a holiday (must match a day header)
        #[arg(short, long)]
        day: u32,

        /// Output workbook path (default: '<input>_rescheduled.xlsx')
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which rows the report counts
        #[arg(long, value_enum, default_value_t = ScopeArg::Rescheduled)]
        scope: ScopeArg,

        /// Print the report as JSON (the operation trace goes to stderr)
        #[arg(long)]
        json: bool,

        /// Show per-row reschedule decisions
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Summarize scheduled deliveries without modifying the workbook.

Counts every delivery-column cell carrying a positive task code across the
whole period, grouped by carrier (column B) and chain (column D). The top 10
of each group are shown, scaled against the group's largest count.

EXAMPLES:
  replan report calendar.xlsx
  replan report calendar.xlsx --json")]
    /// Summarize scheduled deliveries without modifying the workbook
    Report {
        /// Path to the scheduling workbook (.xlsx)
        input: PathBuf,

        /// Which rows the report counts (only 'period' is valid here)
        #[arg(long, value_enum, default_value_t = ScopeArg::Period)]
        scope: ScopeArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Show sheet statistics while reporting
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Reschedule {
            input,
            day,
            output,
            scope,
            json,
            verbose,
        } => commands::reschedule(input, day, output, scope, json, verbose)?,

        Commands::Report {
            input,
            scope,
            json,
            verbose,
        } => commands::report(input, scope, json, verbose)?,
    }

    Ok(())
}
