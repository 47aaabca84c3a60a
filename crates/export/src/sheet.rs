//! Shared worksheet helpers for the workbook exports.

use chrono::{DateTime, Datelike, Utc};
use rust_xlsxwriter::{ExcelDateTime, Format, Worksheet, XlsxError};

use crate::{CURRENCY_FORMAT, DATE_FORMAT};

pub(crate) struct SheetFormats {
    pub header: Format,
    pub currency: Format,
    pub date: Format,
}

impl SheetFormats {
    pub(crate) fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            currency: Format::new().set_num_format(CURRENCY_FORMAT),
            date: Format::new().set_num_format(DATE_FORMAT),
        }
    }
}

pub(crate) fn write_header_row(
    worksheet: &mut Worksheet,
    headers: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

/// Writes a date cell, or an empty cell when the entry has no usable date.
pub(crate) fn write_date(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    date: Option<DateTime<Utc>>,
    format: &Format,
) -> Result<(), XlsxError> {
    match date {
        Some(date) => {
            let cell =
                ExcelDateTime::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)?;
            worksheet.write_with_format(row, col, cell, format)?;
        }
        None => {
            worksheet.write(row, col, "")?;
        }
    }
    Ok(())
}
