//! Maps a calendar day to its delivery column, and a delivery column to its
//! predecessor within the fixed delivery-column set.

use crate::grid::{ColumnRef, Sheet};
use crate::schema::SheetSchema;

/// Scan the delivery columns in chronological order and return the first
/// whose day header equals `holiday_day`.
///
/// The comparison is exact numeric equality against the stored header value;
/// a text header never matches.
pub fn find_holiday_column(
    sheet: &Sheet,
    schema: &SheetSchema,
    holiday_day: u32,
) -> Option<ColumnRef> {
    schema.delivery_columns.iter().copied().find(|&col| {
        sheet.cell(col, schema.day_header_row).as_number() == Some(f64::from(holiday_day))
    })
}

/// The delivery column immediately before `column` in the set.
///
/// `None` for the first column (there is no day to anticipate into) and for
/// a column outside the delivery set.
pub fn predecessor_column(schema: &SheetSchema, column: ColumnRef) -> Option<ColumnRef> {
    match schema.delivery_position(column)? {
        0 => None,
        pos => Some(schema.delivery_columns[pos - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellValue;

    fn sheet_with_day_headers(schema: &SheetSchema, days: [f64; 6]) -> Sheet {
        let mut sheet = Sheet::new(&schema.sheet_name);
        for (col, day) in schema.delivery_columns.iter().zip(days) {
            sheet.set(*col, schema.day_header_row, CellValue::Number(day));
        }
        sheet
    }

    #[test]
    fn test_find_holiday_column() {
        let schema = SheetSchema::default();
        let sheet = sheet_with_day_headers(&schema, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let col = find_holiday_column(&sheet, &schema, 3).unwrap();
        assert_eq!(col.letters(), "AK");

        let col = find_holiday_column(&sheet, &schema, 1).unwrap();
        assert_eq!(col.letters(), "AI");
    }

    #[test]
    fn test_find_holiday_column_not_found() {
        let schema = SheetSchema::default();
        let sheet = sheet_with_day_headers(&schema, [12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
        assert_eq!(find_holiday_column(&sheet, &schema, 99), None);
    }

    #[test]
    fn test_find_holiday_column_ignores_text_headers() {
        let schema = SheetSchema::default();
        let mut sheet = Sheet::new(&schema.sheet_name);
        sheet.set(
            schema.delivery_columns[2],
            schema.day_header_row,
            CellValue::Text("3".to_string()),
        );
        assert_eq!(find_holiday_column(&sheet, &schema, 3), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_headers() {
        let schema = SheetSchema::default();
        let sheet = sheet_with_day_headers(&schema, [7.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
        let col = find_holiday_column(&sheet, &schema, 7).unwrap();
        assert_eq!(col.letters(), "AI");
    }

    #[test]
    fn test_predecessor_column() {
        let schema = SheetSchema::default();
        let aj = ColumnRef::from_letters("AJ").unwrap();
        let an = ColumnRef::from_letters("AN").unwrap();

        assert_eq!(predecessor_column(&schema, aj).unwrap().letters(), "AI");
        assert_eq!(predecessor_column(&schema, an).unwrap().letters(), "AM");
    }

    #[test]
    fn test_first_column_has_no_predecessor() {
        let schema = SheetSchema::default();
        let ai = ColumnRef::from_letters("AI").unwrap();
        assert_eq!(predecessor_column(&schema, ai), None);
    }

    #[test]
    fn test_predecessor_of_non_delivery_column() {
        let schema = SheetSchema::default();
        let b = ColumnRef::from_letters("B").unwrap();
        assert_eq!(predecessor_column(&schema, b), None);
    }
}
