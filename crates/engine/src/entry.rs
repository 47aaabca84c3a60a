//! The module contains the canonical [`LedgerEntry`] type and its ordering
//! helpers.
//!
//! Entries are ephemeral: they are rebuilt from the raw ledger on every
//! query and never written back.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the ledger an entry occupies.
///
/// Amounts are always non-negative; the side carries the sign semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        }
    }
}

/// The origin collection a raw record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrigin {
    Purchase,
    Payment,
    Receipt,
    Expense,
}

impl EntryOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Payment => "Payment",
            Self::Receipt => "Receipt",
            Self::Expense => "Expense",
        }
    }

    /// Initial side assignment: obligations are debits, settlements are
    /// credits. Cash folding happens later, in classification.
    pub fn side(self) -> Side {
        match self {
            Self::Purchase | Self::Expense => Side::Debit,
            Self::Payment | Self::Receipt => Side::Credit,
        }
    }
}

/// A normalized ledger line.
///
/// `id` is unique within its origin collection, not globally. `date` is
/// `None` when no usable date was found in the raw record; such entries
/// contribute normally to totals and sort after dated ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub date: Option<DateTime<Utc>>,
    pub subject_id: String,
    pub side: Side,
    pub origin: EntryOrigin,
    pub payment_method: Option<String>,
    /// Non-negative monetary value in INR.
    pub amount: f64,
    pub invoice_no: Option<String>,
    pub reference_number: Option<String>,
    pub description: Option<String>,
    pub company: String,
}

/// Ascending by date, dateless entries last. The stable sort preserves the
/// source order among ties, which keeps export row order deterministic.
pub(crate) fn sort_ascending(entries: &mut [LedgerEntry]) {
    entries.sort_by(|a, b| cmp_dates(a.date, b.date));
}

/// Descending by date, dateless entries still last (display ordering for
/// on-screen tables).
pub(crate) fn cmp_descending(a: &LedgerEntry, b: &LedgerEntry) -> Ordering {
    match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(date: Option<DateTime<Utc>>, id: &str) -> LedgerEntry {
        LedgerEntry {
            id: id.to_string(),
            date,
            subject_id: "v-1".to_string(),
            side: Side::Debit,
            origin: EntryOrigin::Purchase,
            payment_method: None,
            amount: 1.0,
            invoice_no: None,
            reference_number: None,
            description: None,
            company: String::new(),
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn ascending_sort_puts_dateless_last() {
        let mut entries = vec![
            entry(None, "c"),
            entry(Some(day(20)), "b"),
            entry(Some(day(5)), "a"),
        ];
        sort_ascending(&mut entries);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn descending_order_keeps_dateless_last() {
        let mut entries = vec![
            entry(Some(day(5)), "a"),
            entry(None, "c"),
            entry(Some(day(20)), "b"),
        ];
        entries.sort_by(cmp_descending);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
