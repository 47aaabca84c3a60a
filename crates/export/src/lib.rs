//! Spreadsheet rendering for reconciled ledgers.
//!
//! Two output families: workbooks (`.xlsx` blobs) for bulk runs and
//! individual vendor ledgers, and a BOM-prefixed CSV for individual
//! expense-head ledgers. The vendor/expense format asymmetry is inherited
//! from the origin system and kept as-is.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

pub use bulk::bulk_workbook;
pub use filename::export_filename;
pub use subject::{expense_csv, vendor_workbook};

mod bulk;
mod filename;
mod sheet;
mod subject;

/// Errors an export run can surface to the user.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Zero resulting rows: user-facing validation, aborts only the
    /// requested export.
    #[error("nothing to export: {0}")]
    Empty(String),
    #[error(transparent)]
    Workbook(#[from] XlsxError),
    #[error("csv write failed: {0}")]
    Csv(String),
}

/// Numeric format applied to every currency cell in workbooks.
pub(crate) const CURRENCY_FORMAT: &str = "₹ #,##0.00";
/// Numeric format applied to every date cell in workbooks.
pub(crate) const DATE_FORMAT: &str = "dd-mmm-yyyy";
/// Rendering of dates in CSV cells, matching the workbook display.
pub(crate) const CSV_DATE_FORMAT: &str = "%d-%b-%Y";
