use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod subject {
    use super::*;

    /// What a ledger is reconciled against: a vendor account or an expense
    /// head.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SubjectKind {
        Vendor,
        Expense,
    }

    impl SubjectKind {
        /// Returns the label used in export headers and log lines.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Vendor => "Vendor",
                Self::Expense => "Expense",
            }
        }
    }

    /// A ledger subject as known to the persistence service.
    ///
    /// Ids are opaque strings minted by the origin system; they are unique
    /// within a kind, not globally.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Subject {
        pub id: String,
        pub name: String,
        pub kind: SubjectKind,
    }

    impl Subject {
        pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SubjectKind) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
                kind,
            }
        }
    }
}

pub mod ledger {
    use super::*;

    /// Inclusive date range forwarded to the ledger endpoints.
    ///
    /// Serialized as `YYYY-MM-DD` on the wire; the persistence service owns
    /// the boundary semantics.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DateRange {
        pub from: NaiveDate,
        pub to: NaiveDate,
    }

    /// A raw transaction record as returned by the persistence service.
    ///
    /// Historical records disagree on field names, so every candidate field
    /// is optional and resolution happens downstream. Amount candidates in
    /// priority order: `amount`, `totalAmount`, `grandTotal`, `netAmount`,
    /// `value`, `total`. Date candidates: `date`, `createdAt`,
    /// `invoiceDate`, `voucherDate`.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct RawEntry {
        pub id: Option<String>,

        pub amount: Option<f64>,
        pub total_amount: Option<f64>,
        pub grand_total: Option<f64>,
        pub net_amount: Option<f64>,
        pub value: Option<f64>,
        pub total: Option<f64>,

        /// Dates arrive as strings in whatever format the origin system
        /// used at the time; parsing is tolerant and happens downstream.
        pub date: Option<String>,
        pub created_at: Option<String>,
        pub invoice_date: Option<String>,
        pub voucher_date: Option<String>,

        pub payment_method: Option<String>,
        pub invoice_no: Option<String>,
        pub reference_number: Option<String>,
        pub description: Option<String>,
        pub company: Option<String>,
    }

    /// Response shape of both `GET /ledger/vendor-payables` and
    /// `GET /ledger/expense-payables`.
    ///
    /// `debit` holds the obligation records (purchases or expenses),
    /// `credit` holds the settlement records (payments/receipts).
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct RawLedger {
        pub debit: Vec<RawEntry>,
        pub credit: Vec<RawEntry>,
    }
}

#[cfg(test)]
mod tests {
    use super::ledger::{RawEntry, RawLedger};

    #[test]
    fn raw_entry_tolerates_missing_fields() {
        let entry: RawEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.id.is_none());
        assert!(entry.amount.is_none());
        assert!(entry.date.is_none());
    }

    #[test]
    fn raw_entry_reads_camel_case_variants() {
        let entry: RawEntry = serde_json::from_str(
            r#"{
                "id": "p-1",
                "grandTotal": 1180.0,
                "invoiceDate": "2024-01-15",
                "paymentMethod": "Credit",
                "invoiceNo": "INV-42",
                "referenceNumber": "REF-9",
                "company": "co-1"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.grand_total, Some(1180.0));
        assert_eq!(entry.invoice_date.as_deref(), Some("2024-01-15"));
        assert_eq!(entry.payment_method.as_deref(), Some("Credit"));
    }

    #[test]
    fn raw_ledger_defaults_both_sides_to_empty() {
        let ledger: RawLedger = serde_json::from_str("{}").unwrap();
        assert!(ledger.debit.is_empty());
        assert!(ledger.credit.is_empty());

        let ledger: RawLedger = serde_json::from_str(r#"{"debit": [{}]}"#).unwrap();
        assert_eq!(ledger.debit.len(), 1);
        assert!(ledger.credit.is_empty());
    }
}
