//! Workbook output - in-memory grid → .xlsx

use crate::error::{ReplanError, ReplanResult};
use crate::grid::{CellValue, Sheet};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write the grid back out as a single-sheet .xlsx workbook, preserving the
/// sheet name and cell positions.
pub fn save_sheet(sheet: &Sheet, path: &Path) -> ReplanResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet.name())
        .map_err(|e| ReplanError::Export(format!("failed to set worksheet name: {e}")))?;

    for (column, row, value) in sheet.iter_cells() {
        // Worksheet API is 0-indexed
        let row_idx = row - 1;
        let col_idx = column.index() - 1;
        let written = match value {
            CellValue::Number(n) => worksheet.write_number(row_idx, col_idx, *n),
            CellValue::Text(s) => worksheet.write_string(row_idx, col_idx, s),
            CellValue::Bool(b) => worksheet.write_boolean(row_idx, col_idx, *b),
            CellValue::Empty => continue,
        };
        written.map_err(|e| {
            ReplanError::Export(format!("failed to write cell {column}{row}: {e}"))
        })?;
    }

    workbook
        .save(path)
        .map_err(|e| ReplanError::Export(format!("failed to save Excel file: {e}")))?;

    Ok(())
}
