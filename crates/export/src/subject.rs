//! Individual-subject exports: a workbook for vendors, a CSV for expense
//! heads.

use engine::{Side, SubjectLedger};
use rust_xlsxwriter::Workbook;

use crate::sheet::{SheetFormats, write_date, write_header_row};
use crate::{CSV_DATE_FORMAT, ExportError};

const COLUMNS: [&str; 8] = [
    "S.No",
    "Date",
    "Invoice No",
    "Reference No",
    "Description",
    "Payment Method",
    "Debit",
    "Credit",
];

/// Renders one vendor's ledger as a workbook: chronological entries with a
/// running serial number, then a totals block using the detail-view status
/// convention (debit minus credit).
pub fn vendor_workbook(ledger: &SubjectLedger) -> Result<Vec<u8>, ExportError> {
    if ledger.is_empty() {
        return Err(ExportError::Empty(format!(
            "no ledger entries for \"{}\"",
            ledger.subject.name
        )));
    }

    let mut workbook = Workbook::new();
    let formats = SheetFormats::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Ledger")?;

    write_header_row(worksheet, &COLUMNS, &formats.header)?;

    let mut row = 1u32;
    for (index, entry) in ledger.entries.iter().enumerate() {
        worksheet.write(row, 0, (index + 1) as u32)?;
        write_date(worksheet, row, 1, entry.date, &formats.date)?;
        worksheet.write(row, 2, entry.invoice_no.clone().unwrap_or_default())?;
        worksheet.write(row, 3, entry.reference_number.clone().unwrap_or_default())?;
        worksheet.write(row, 4, entry.description.clone().unwrap_or_default())?;
        worksheet.write(row, 5, entry.payment_method.clone().unwrap_or_default())?;
        let amount_col = match entry.side {
            Side::Debit => 6,
            Side::Credit => 7,
        };
        worksheet.write_with_format(row, amount_col, entry.amount, &formats.currency)?;
        row += 1;
    }

    row += 1;
    let totals = &ledger.totals;
    worksheet.write_with_format(row, 0, "Total Debit", &formats.header)?;
    worksheet.write_with_format(row, 6, totals.debit_total, &formats.currency)?;
    row += 1;
    worksheet.write_with_format(row, 0, "Total Credit", &formats.header)?;
    worksheet.write_with_format(row, 7, totals.credit_total, &formats.currency)?;
    row += 1;
    worksheet.write_with_format(row, 0, "Balance", &formats.header)?;
    worksheet.write_with_format(row, 7, totals.balance, &formats.currency)?;
    row += 1;
    worksheet.write_with_format(row, 0, "Status", &formats.header)?;
    worksheet.write(row, 1, totals.status().as_str())?;

    worksheet.set_column_width(1, 14)?;
    worksheet.set_column_width(4, 32)?;

    Ok(workbook.save_to_buffer()?)
}

/// Renders one expense head's ledger as a BOM-prefixed UTF-8 CSV with the
/// same row shape and totals block as the vendor workbook.
pub fn expense_csv(ledger: &SubjectLedger) -> Result<Vec<u8>, ExportError> {
    if ledger.is_empty() {
        return Err(ExportError::Empty(format!(
            "no ledger entries for \"{}\"",
            ledger.subject.name
        )));
    }

    let mut buf = Vec::new();
    // The byte-order mark keeps spreadsheet tools from misreading UTF-8.
    buf.extend_from_slice("\u{feff}".as_bytes());
    let mut writer = csv::Writer::from_writer(buf);

    writer.write_record(COLUMNS).map_err(csv_err)?;
    for (index, entry) in ledger.entries.iter().enumerate() {
        let (debit, credit) = match entry.side {
            Side::Debit => (format!("{:.2}", entry.amount), String::new()),
            Side::Credit => (String::new(), format!("{:.2}", entry.amount)),
        };
        writer
            .write_record([
                (index + 1).to_string(),
                entry
                    .date
                    .map(|d| d.format(CSV_DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                entry.invoice_no.clone().unwrap_or_default(),
                entry.reference_number.clone().unwrap_or_default(),
                entry.description.clone().unwrap_or_default(),
                entry.payment_method.clone().unwrap_or_default(),
                debit,
                credit,
            ])
            .map_err(csv_err)?;
    }

    let totals = &ledger.totals;
    writer.write_record([""; 8]).map_err(csv_err)?;
    writer
        .write_record(padded("Total Debit", 6, format!("{:.2}", totals.debit_total)))
        .map_err(csv_err)?;
    writer
        .write_record(padded("Total Credit", 7, format!("{:.2}", totals.credit_total)))
        .map_err(csv_err)?;
    writer
        .write_record(padded("Balance", 7, format!("{:.2}", totals.balance)))
        .map_err(csv_err)?;
    writer
        .write_record(padded("Status", 1, totals.status().as_str().to_string()))
        .map_err(csv_err)?;

    writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.to_string()))
}

/// An 8-field record with a label in the first column and one value at
/// `value_col`.
fn padded(label: &str, value_col: usize, value: String) -> Vec<String> {
    let mut record = vec![String::new(); 8];
    record[0] = label.to_string();
    record[value_col] = value;
    record
}

fn csv_err(err: csv::Error) -> ExportError {
    ExportError::Csv(err.to_string())
}
