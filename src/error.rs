use thiserror::Error;

pub type ReplanResult<T> = Result<T, ReplanError>;

#[derive(Error, Debug)]
pub enum ReplanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read the workbook: {0}")]
    Workbook(String),

    #[error("sheet '{0}' not found in the workbook")]
    SheetNotFound(String),

    #[error("day {0} was not found in the delivery-column headers")]
    DayNotFound(u32),

    #[error("day {0} is the first day of the period and cannot be anticipated")]
    FirstDayOfPeriod(u32),

    #[error("could not write the rescheduled workbook: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
