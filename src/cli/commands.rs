use crate::engine;
use crate::error::{ReplanError, ReplanResult};
use crate::excel;
use crate::report::{self, Report, ReportScope};
use crate::runlog::RunLog;
use crate::schema::SheetSchema;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Report scope selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScopeArg {
    /// Count only the rows moved by this run
    Rescheduled,
    /// Count scheduled deliveries across the whole period
    Period,
}

impl std::fmt::Display for ScopeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ScopeArg::Rescheduled => "rescheduled",
            ScopeArg::Period => "period",
        })
    }
}

/// Suffix appended to the input file stem for the default output path.
const OUTPUT_SUFFIX: &str = "_rescheduled";

/// Widest bar drawn in the terminal report.
const BAR_WIDTH: usize = 24;

/// Execute the reschedule command
pub fn reschedule(
    input: PathBuf,
    day: u32,
    output: Option<PathBuf>,
    scope: ScopeArg,
    json: bool,
    verbose: bool,
) -> ReplanResult<()> {
    let schema = SheetSchema::default();
    let output = output.unwrap_or_else(|| default_output_path(&input));

    if !json {
        println!("{}", "📅 Replan - Holiday Rescheduling".bold().green());
        println!("   Input:  {}", input.display());
        println!("   Output: {}", output.display());
        println!(
            "   Holiday day: {}\n",
            day.to_string().bright_yellow().bold()
        );
    }

    let (result, log) = engine::run_reschedule(&input, day, &schema);

    // The operation trace is shown whether the run succeeded or not. In
    // JSON mode it goes to stderr so stdout stays machine-readable.
    print_log(&log, json);

    let rescheduled = result?;

    if verbose && !json {
        println!("{}", "🔎 Moved rows:".bold().cyan());
        for &row in &rescheduled.outcome.moved_rows {
            let store = rescheduled
                .sheet
                .cell(schema.store_column, row)
                .group_key()
                .unwrap_or_else(|| "?".to_string());
            println!(
                "   Row {row} (store {store}): task moved to column {}",
                rescheduled.outcome.destination_column
            );
        }
        println!();
    }

    let scope = match scope {
        ScopeArg::Rescheduled => ReportScope::Rescheduled(rescheduled.outcome.moved_rows.clone()),
        ScopeArg::Period => ReportScope::WholePeriod,
    };
    let report = report::aggregate(&rescheduled.sheet, &schema, &scope);

    excel::save_sheet(&rescheduled.sheet, &output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        println!("{}", "✅ Rescheduling complete!".bold().green());
        println!("   Rescheduled workbook: {}\n", output.display());
    }

    Ok(())
}

/// Execute the report command
pub fn report(input: PathBuf, scope: ScopeArg, json: bool, verbose: bool) -> ReplanResult<()> {
    if scope == ScopeArg::Rescheduled {
        return Err(ReplanError::Validation(
            "the rescheduled scope needs a reschedule pass; use 'replan reschedule --scope rescheduled'"
                .to_string(),
        ));
    }

    let schema = SheetSchema::default();

    if !json {
        println!("{}", "📊 Replan - Delivery Report".bold().green());
        println!("   Input: {}\n", input.display());
    }

    let mut log = RunLog::new();
    let result = engine::load_sheet(&input, &schema, &mut log);
    print_log(&log, json);
    let sheet = result?;

    if verbose && !json {
        println!("   Last used row: {}\n", sheet.last_used_row());
    }

    let report = report::aggregate(&sheet, &schema, &ReportScope::WholePeriod);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// `calendar.xlsx` → `calendar_rescheduled.xlsx`, next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workbook".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "xlsx".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{extension}"))
}

fn print_log(log: &RunLog, to_stderr: bool) {
    if !to_stderr {
        println!("{}", "📋 Operation Report".bold().cyan());
    }
    for entry in log.entries() {
        let line = if entry.starts_with("ERROR") {
            entry.red().to_string()
        } else if entry.starts_with("Warning") {
            entry.yellow().to_string()
        } else {
            entry.clone()
        };
        if to_stderr {
            eprintln!("{line}");
        } else {
            println!("   {line}");
        }
    }
    if !to_stderr {
        println!();
    }
}

fn print_report(report: &Report) {
    println!("{}", "📊 Delivery Report".bold().cyan());
    println!(
        "   Deliveries counted: {}",
        report.total_deliveries.to_string().bold()
    );

    print_group("By carrier", &report.by_carrier, report.max_carrier_count);
    print_group("By chain", &report.by_chain, report.max_chain_count);
    println!();
}

/// One bar per entry, scaled to the group maximum.
fn print_group(title: &str, entries: &[(String, u32)], max_count: u32) {
    if entries.is_empty() {
        return;
    }
    println!("\n   {}:", title.bold());
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in entries {
        let bar_len = (*count as usize * BAR_WIDTH) / max_count.max(1) as usize;
        let bar = "█".repeat(bar_len.max(1));
        println!("   {name:<width$}  {count:>5}  {}", bar.bright_blue());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/calendar.xlsx")),
            PathBuf::from("/data/calendar_rescheduled.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("calendar.xlsx")),
            PathBuf::from("calendar_rescheduled.xlsx")
        );
    }

    #[test]
    fn test_report_rejects_rescheduled_scope() {
        let result = report(
            PathBuf::from("anything.xlsx"),
            ScopeArg::Rescheduled,
            false,
            false,
        );
        assert!(matches!(result, Err(ReplanError::Validation(_))));
    }
}
