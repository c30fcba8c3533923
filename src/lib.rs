//! Replan - holiday rescheduling for fixed-layout delivery workbooks
//!
//! When a calendar day is declared a holiday, deliveries scheduled on that
//! day's column move one delivery day earlier: the destination cell gets the
//! destination column's weekday code, the holiday cell is cleared, and an
//! observation note records the move. A companion report summarizes the
//! affected deliveries grouped by carrier and chain.
//!
//! # Features
//!
//! - Fixed-layout .xlsx calendars read with calamine, written with
//!   rust_xlsxwriter
//! - The sheet layout (column roles, header rows, weekday codes) lives in a
//!   single [`schema::SheetSchema`] value
//! - Two report scopes: rows moved by the run, or the whole period
//! - An ordered operation trace is returned on every exit path
//!
//! # Example
//!
//! ```no_run
//! use replan::engine;
//! use replan::schema::SheetSchema;
//! use std::path::Path;
//!
//! let schema = SheetSchema::default();
//! let (result, log) = engine::run_reschedule(Path::new("calendar.xlsx"), 15, &schema);
//! for line in log.entries() {
//!     println!("{line}");
//! }
//! let rescheduled = result?;
//! println!("{} tasks moved", rescheduled.outcome.moved_count());
//! # Ok::<(), replan::ReplanError>(())
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod excel;
pub mod grid;
pub mod report;
pub mod reschedule;
pub mod resolver;
pub mod runlog;
pub mod schema;

// Re-export commonly used types
pub use error::{ReplanError, ReplanResult};
pub use grid::{CellValue, ColumnRef, Sheet};
pub use report::{Report, ReportScope};
pub use reschedule::RescheduleOutcome;
pub use runlog::RunLog;
pub use schema::SheetSchema;
