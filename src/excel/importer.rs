//! Workbook input - .xlsx → in-memory grid

use crate::error::{ReplanError, ReplanResult};
use crate::grid::{CellValue, ColumnRef, Sheet};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Load one named worksheet from an .xlsx file.
///
/// Cell addresses are absolute: the used range's start offset is honored, so
/// row and column numbers match what the workbook shows. The calamine handle
/// is dropped as soon as the grid is materialized.
pub fn load_workbook_sheet(path: &Path, sheet_name: &str) -> ReplanResult<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| ReplanError::Workbook(format!("failed to open '{}': {e}", path.display())))?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|_| ReplanError::SheetNotFound(sheet_name.to_string()))?;

    let mut sheet = Sheet::new(sheet_name);
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    for (row, col, data) in range.used_cells() {
        let value = convert_cell(data);
        if value.is_empty() {
            continue;
        }
        let abs_row = start_row + row as u32 + 1;
        let column = u16::try_from(start_col + col as u32 + 1)
            .ok()
            .and_then(ColumnRef::from_index);
        let Some(column) = column else {
            continue;
        };
        sheet.set(column, abs_row, value);
    }
    Ok(sheet)
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        // Day headers are plain numbers; a date-formatted cell still reads
        // back as its serial value.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
