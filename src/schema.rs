//! The fixed-layout contract of the scheduling worksheet.
//!
//! Every column role, header row, and the weekday code set lives here so
//! layout drift is a one-place change. The defaults match the production
//! calendar workbook.

use crate::grid::ColumnRef;

/// Weekday initials as they appear in the weekday header row, with their
/// weekday numbers. Non-English day initials; part of the sheet contract.
const WEEKDAY_CODES: [(char, u8); 7] = [
    ('L', 1),
    ('M', 2),
    ('W', 3),
    ('J', 4),
    ('V', 5),
    ('S', 6),
    ('D', 7),
];

/// Layout of the scheduling sheet: where headers live, which columns carry
/// which role, and how weekday initials map to weekday numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSchema {
    /// Name of the worksheet inside the workbook.
    pub sheet_name: String,
    /// Row holding the calendar day number of each delivery column.
    pub day_header_row: u32,
    /// Row holding the weekday initial of each delivery column.
    pub weekday_header_row: u32,
    /// First row carrying delivery records.
    pub first_data_row: u32,
    pub carrier_column: ColumnRef,
    pub chain_column: ColumnRef,
    pub store_column: ColumnRef,
    /// The six consecutive delivery-day columns, in chronological order.
    pub delivery_columns: [ColumnRef; 6],
    pub observation_column: ColumnRef,
}

impl SheetSchema {
    /// Position of `column` within the delivery column set, if it is one.
    pub fn delivery_position(&self, column: ColumnRef) -> Option<usize> {
        self.delivery_columns.iter().position(|&c| c == column)
    }

    /// Map a weekday-initial cell text to its weekday number (1–7).
    ///
    /// The whole trimmed text must be a single known initial; anything else
    /// (unknown letter, multi-character text) does not map.
    pub fn weekday_number(&self, abbrev: &str) -> Option<u8> {
        let mut chars = abbrev.trim().chars();
        let (Some(initial), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let initial = initial.to_ascii_uppercase();
        WEEKDAY_CODES
            .iter()
            .find(|(code, _)| *code == initial)
            .map(|(_, number)| *number)
    }
}

impl Default for SheetSchema {
    fn default() -> Self {
        Self {
            sheet_name: "01. Calendario SCL Abarrotes".to_string(),
            day_header_row: 3,
            weekday_header_row: 6,
            first_data_row: 8,
            carrier_column: col("B"),
            chain_column: col("D"),
            store_column: col("F"),
            delivery_columns: [col("AI"), col("AJ"), col("AK"), col("AL"), col("AM"), col("AN")],
            observation_column: col("CT"),
        }
    }
}

fn col(letters: &str) -> ColumnRef {
    ColumnRef::from_letters(letters).expect("valid column letters")
}
