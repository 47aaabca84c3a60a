//! Bulk workbook: every subject's ledger on one sheet.

use engine::{Reconciliation, Side};
use rust_xlsxwriter::Workbook;

use crate::sheet::{SheetFormats, write_date, write_header_row};
use crate::ExportError;

/// Renders a reconciliation into a single-sheet workbook: one row per
/// (subject, entry) pair, entries ascending by date within each subject
/// block, followed by the summary rows.
///
/// Fails with [`ExportError::Empty`] when the run produced zero rows.
pub fn bulk_workbook(recon: &Reconciliation) -> Result<Vec<u8>, ExportError> {
    if recon.row_count() == 0 {
        return Err(ExportError::Empty(
            "no ledger rows for the requested subjects and range".to_string(),
        ));
    }

    let kind_label = recon
        .subjects
        .first()
        .map(|ledger| ledger.subject.kind.as_str())
        .unwrap_or("Subject");

    let mut workbook = Workbook::new();
    let formats = SheetFormats::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Payables")?;

    write_header_row(
        worksheet,
        &[
            kind_label,
            "Date",
            "Invoice No",
            "Reference No",
            "Description",
            "Payment Method",
            "Debit",
            "Credit",
        ],
        &formats.header,
    )?;

    let mut row = 1u32;
    for ledger in &recon.subjects {
        for entry in &ledger.entries {
            worksheet.write(row, 0, ledger.subject.name.as_str())?;
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
    }

    // Summary block, separated by one blank row. The net position follows
    // the bulk convention: credit minus debit.
    row += 1;
    let grand = &recon.grand;
    worksheet.write_with_format(row, 0, format!("Total {kind_label}s"), &formats.header)?;
    worksheet.write(row, 1, grand.subject_count as u32)?;
    row += 1;
    worksheet.write_with_format(row, 0, "Total Debit", &formats.header)?;
    worksheet.write_with_format(row, 6, grand.total_debit, &formats.currency)?;
    row += 1;
    worksheet.write_with_format(row, 0, "Total Credit", &formats.header)?;
    worksheet.write_with_format(row, 7, grand.total_credit, &formats.currency)?;
    row += 1;
    worksheet.write_with_format(row, 0, grand.position().as_str(), &formats.header)?;
    worksheet.write_with_format(row, 7, grand.total_balance, &formats.currency)?;

    worksheet.set_column_width(0, 28)?;
    worksheet.set_column_width(1, 14)?;
    worksheet.set_column_width(4, 32)?;

    Ok(workbook.save_to_buffer()?)
}
