//! The core rescheduling pass: move holiday-column tasks one delivery day
//! earlier, substituting the destination column's weekday code.

use crate::error::{ReplanError, ReplanResult};
use crate::grid::{CellValue, ColumnRef, Sheet};
use crate::resolver;
use crate::runlog::RunLog;
use crate::schema::SheetSchema;
use tracing::debug;

/// Task codes a delivery cell may carry. Anything outside this range, or
/// non-numeric, means the row has no actionable task.
const TASK_CODE_MIN: f64 = 1.0;
const TASK_CODE_MAX: f64 = 6.0;

/// Result of a completed rescheduling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleOutcome {
    /// Delivery column whose day header matched the holiday.
    pub holiday_column: ColumnRef,
    /// Delivery column the tasks were anticipated into.
    pub destination_column: ColumnRef,
    /// Rows whose task was moved, in scan order.
    pub moved_rows: Vec<u32>,
}

impl RescheduleOutcome {
    pub fn moved_count(&self) -> usize {
        self.moved_rows.len()
    }
}

/// Move every task scheduled on the holiday's column one delivery day
/// earlier.
///
/// Mutates the sheet in place: for each moved row the destination cell gets
/// the destination column's weekday number, the holiday cell is cleared, and
/// an observation note is written. On [`ReplanError::DayNotFound`] or
/// [`ReplanError::FirstDayOfPeriod`] the sheet is untouched and the terminal
/// log line has already been recorded.
pub fn reschedule(
    sheet: &mut Sheet,
    schema: &SheetSchema,
    holiday_day: u32,
    log: &mut RunLog,
) -> ReplanResult<RescheduleOutcome> {
    let Some(holiday_column) = resolver::find_holiday_column(sheet, schema, holiday_day) else {
        log.push(format!(
            "ERROR: The day {holiday_day} was not found in row {} of the Delivery columns.",
            schema.day_header_row
        ));
        return Err(ReplanError::DayNotFound(holiday_day));
    };

    log.push(format!(
        "Holiday identified in the Delivery column: {holiday_column}"
    ));

    let Some(destination_column) = resolver::predecessor_column(schema, holiday_column) else {
        log.push("Warning: The holiday is the first day of the period. It cannot be anticipated.");
        return Err(ReplanError::FirstDayOfPeriod(holiday_day));
    };

    // The weekday initial is a per-column header, constant across rows; one
    // read covers the whole scan.
    let weekday = sheet
        .cell(destination_column, schema.weekday_header_row)
        .as_text()
        .and_then(|text| schema.weekday_number(text));

    let note = observation_note(holiday_day, destination_column);
    let last_row = sheet.last_used_row();
    let mut moved_rows = Vec::new();

    for row in schema.first_data_row..=last_row {
        let Some(code) = sheet.cell(holiday_column, row).as_number() else {
            continue;
        };
        if !(TASK_CODE_MIN..=TASK_CODE_MAX).contains(&code) {
            continue;
        }
        // Unmapped weekday initial: the row cannot be anticipated; skipped
        // silently, not counted.
        let Some(weekday) = weekday else {
            continue;
        };

        sheet.set(destination_column, row, CellValue::Number(f64::from(weekday)));
        sheet.set(holiday_column, row, CellValue::Empty);
        sheet.set(schema.observation_column, row, CellValue::Text(note.clone()));
        debug!(row, code, destination = %destination_column, "task moved one day earlier");
        moved_rows.push(row);
    }

    log.push(format!(
        "Rescheduling completed. {} tasks were moved.",
        moved_rows.len()
    ));

    Ok(RescheduleOutcome {
        holiday_column,
        destination_column,
        moved_rows,
    })
}

/// Note written to the observation column of every moved row, recording the
/// original holiday day and the destination column.
fn observation_note(holiday_day: u32, destination: ColumnRef) -> String {
    format!(
        "Delivery rescheduled (with substitution) from day {holiday_day} to column {destination}."
    )
}
