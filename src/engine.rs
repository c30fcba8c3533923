//! One rescheduling run, end to end: load the sheet, run the pass, collect
//! the operation trace.

use crate::error::ReplanResult;
use crate::excel;
use crate::grid::Sheet;
use crate::reschedule::{self, RescheduleOutcome};
use crate::runlog::RunLog;
use crate::schema::SheetSchema;
use std::path::Path;
use tracing::info;

/// A successfully rescheduled sheet together with its outcome.
#[derive(Debug, Clone)]
pub struct Rescheduled {
    pub sheet: Sheet,
    pub outcome: RescheduleOutcome,
}

/// Load the scheduling sheet named by the schema, logging success or the
/// load-failure line with the underlying cause.
pub fn load_sheet(path: &Path, schema: &SheetSchema, log: &mut RunLog) -> ReplanResult<Sheet> {
    match excel::load_workbook_sheet(path, &schema.sheet_name) {
        Ok(sheet) => {
            log.push(format!(
                "Spreadsheet '{}' loaded successfully.",
                file_label(path)
            ));
            info!(path = %path.display(), last_used_row = sheet.last_used_row(), "workbook loaded");
            Ok(sheet)
        }
        Err(e) => {
            log.push(format!(
                "ERROR: Could not read the spreadsheet. Please check if it is the correct file. Details: {e}"
            ));
            Err(e)
        }
    }
}

/// Run the whole pass against the workbook at `path`.
///
/// The log is returned on every exit path, so the caller can always render
/// a full operation trace.
pub fn run_reschedule(
    path: &Path,
    holiday_day: u32,
    schema: &SheetSchema,
) -> (ReplanResult<Rescheduled>, RunLog) {
    let mut log = RunLog::new();
    let result: ReplanResult<Rescheduled> = (|| {
        let mut sheet = load_sheet(path, schema, &mut log)?;
        let outcome = reschedule::reschedule(&mut sheet, schema, holiday_day, &mut log)?;
        Ok(Rescheduled { sheet, outcome })
    })();
    (result, log)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
