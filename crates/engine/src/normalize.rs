//! Raw record normalization.
//!
//! Historical records spell the same semantic value under several field
//! names, so extraction runs over an explicit priority list instead of ad
//! hoc fallback chains. Normalization never fails: a record with no usable
//! amount or date still becomes an entry with `amount = 0.0` / `date =
//! None` and is absorbed by aggregation as a zero contribution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{EntryOrigin, LedgerEntry, RawEntry, RawLedger, SubjectKind};

/// Returns the first candidate, in priority order, that passes `usable`.
pub fn first_usable<T>(
    candidates: impl IntoIterator<Item = Option<T>>,
    usable: impl Fn(&T) -> bool,
) -> Option<T> {
    candidates.into_iter().flatten().find(|value| usable(value))
}

/// Amount priority: `amount`, `totalAmount`, `grandTotal`, `netAmount`,
/// `value`, `total`. Zero, negative and non-finite candidates fall
/// through; sign semantics live on the entry side, never on the value.
fn resolve_amount(raw: &RawEntry) -> f64 {
    first_usable(
        [
            raw.amount,
            raw.total_amount,
            raw.grand_total,
            raw.net_amount,
            raw.value,
            raw.total,
        ],
        |value| value.is_finite() && *value > 0.0,
    )
    .unwrap_or(0.0)
}

/// Date priority: `date`, `createdAt`, `invoiceDate`, `voucherDate`.
///
/// The first non-empty candidate wins *before* parsing; if that candidate
/// then fails to parse the entry gets no date rather than falling through
/// to a lower-priority field.
fn resolve_date(raw: &RawEntry) -> Option<DateTime<Utc>> {
    let candidate = first_usable(
        [
            raw.date.as_deref(),
            raw.created_at.as_deref(),
            raw.invoice_date.as_deref(),
            raw.voucher_date.as_deref(),
        ],
        |value| !value.trim().is_empty(),
    )?;
    parse_date(candidate.trim())
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    for format in ["%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }
    None
}

/// Maps one raw record into a canonical entry. Never fails.
pub fn normalize(raw: &RawEntry, origin: EntryOrigin, subject_id: &str) -> LedgerEntry {
    LedgerEntry {
        id: raw.id.clone().unwrap_or_default(),
        date: resolve_date(raw),
        subject_id: subject_id.to_string(),
        side: origin.side(),
        origin,
        payment_method: raw.payment_method.clone(),
        amount: resolve_amount(raw),
        invoice_no: raw.invoice_no.clone(),
        reference_number: raw.reference_number.clone(),
        description: raw.description.clone(),
        company: raw.company.clone().unwrap_or_default(),
    }
}

/// Normalizes a whole two-sided response for one subject.
///
/// The debit array holds the obligation records for the subject kind
/// (purchases for vendors, expense vouchers for expense heads); the credit
/// array holds settlements, which the endpoints do not distinguish further.
pub fn normalize_ledger(ledger: &RawLedger, kind: SubjectKind, subject_id: &str) -> Vec<LedgerEntry> {
    let debit_origin = match kind {
        SubjectKind::Vendor => EntryOrigin::Purchase,
        SubjectKind::Expense => EntryOrigin::Expense,
    };

    let mut entries = Vec::with_capacity(ledger.debit.len() + ledger.credit.len());
    entries.extend(
        ledger
            .debit
            .iter()
            .map(|raw| normalize(raw, debit_origin, subject_id)),
    );
    entries.extend(
        ledger
            .credit
            .iter()
            .map(|raw| normalize(raw, EntryOrigin::Payment, subject_id)),
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use chrono::{Datelike, Timelike};

    #[test]
    fn first_usable_respects_priority_order() {
        assert_eq!(
            first_usable([None, Some(2), Some(3)], |_| true),
            Some(2)
        );
        assert_eq!(
            first_usable([Some(0), Some(2)], |v| *v != 0),
            Some(2)
        );
        let none: Option<i32> = first_usable([None, None], |_| true);
        assert_eq!(none, None);
    }

    #[test]
    fn amount_falls_back_through_variants() {
        let raw = RawEntry {
            total_amount: Some(0.0),
            grand_total: Some(1180.0),
            total: Some(999.0),
            ..Default::default()
        };
        let entry = normalize(&raw, EntryOrigin::Purchase, "v-1");
        assert_eq!(entry.amount, 1180.0);
    }

    #[test]
    fn unusable_amounts_normalize_to_zero() {
        let raw = RawEntry {
            amount: Some(-50.0),
            value: Some(f64::NAN),
            ..Default::default()
        };
        let entry = normalize(&raw, EntryOrigin::Purchase, "v-1");
        assert_eq!(entry.amount, 0.0);
    }

    #[test]
    fn date_priority_picks_before_parsing() {
        // `date` is present but garbage: the entry gets no date instead of
        // falling through to `createdAt`.
        let raw = RawEntry {
            date: Some("not-a-date".to_string()),
            created_at: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        let entry = normalize(&raw, EntryOrigin::Purchase, "v-1");
        assert!(entry.date.is_none());

        let raw = RawEntry {
            date: Some("  ".to_string()),
            created_at: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        let entry = normalize(&raw, EntryOrigin::Purchase, "v-1");
        assert_eq!(entry.date.map(|d| d.day()), Some(15));
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        let rfc = parse_date("2024-03-02T10:30:00+05:30").unwrap();
        assert_eq!((rfc.day(), rfc.hour()), (2, 5));

        let naive = parse_date("2024-03-02T10:30:00").unwrap();
        assert_eq!(naive.hour(), 10);

        assert_eq!(parse_date("2024-03-02").unwrap().day(), 2);
        assert_eq!(parse_date("02-03-2024").unwrap().month(), 3);
        assert!(parse_date("garbage").is_none());
    }

    #[test]
    fn normalize_ledger_assigns_sides_by_array() {
        let ledger = RawLedger {
            debit: vec![RawEntry {
                amount: Some(100.0),
                ..Default::default()
            }],
            credit: vec![RawEntry {
                amount: Some(40.0),
                ..Default::default()
            }],
        };

        let entries = normalize_ledger(&ledger, SubjectKind::Vendor, "v-1");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].side, Side::Debit);
        assert_eq!(entries[0].origin, EntryOrigin::Purchase);
        assert_eq!(entries[1].side, Side::Credit);
        assert_eq!(entries[1].origin, EntryOrigin::Payment);

        let entries = normalize_ledger(&ledger, SubjectKind::Expense, "e-1");
        assert_eq!(entries[0].origin, EntryOrigin::Expense);
    }
}
