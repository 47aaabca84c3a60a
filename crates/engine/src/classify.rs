//! Debit/credit classification and the cash-purchase reclassification rule.

use serde::Serialize;

use crate::{LedgerEntry, Side};

/// The payment method that marks an obligation as genuinely unpaid.
///
/// Everything else (`Cash`, `Bank Transfer`, `UPI`, `Cheque`, and notably a
/// *missing* method) means the purchase was settled at the counter.
pub const CREDIT_TERMS: &str = "Credit";

/// How one entry contributes to the totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The side the entry is displayed on.
    pub side: Side,
    /// True when the entry's amount also folds into the credit total: the
    /// obligation was paid at purchase time, so only the display line stays
    /// on the debit side.
    pub settles_immediately: bool,
}

/// Applies the cash-purchase rule to a normalized entry.
///
/// A debit-side entry whose `payment_method` is not the literal
/// [`CREDIT_TERMS`] counts toward the credit total *in addition to* its
/// debit line. The missing-method case deliberately counts as settled,
/// mirroring a plain `!= "Credit"` comparison. Credit-side entries are pure
/// settlements and never fold.
pub fn classify(entry: &LedgerEntry) -> Classification {
    let settles_immediately = entry.side == Side::Debit
        && entry.payment_method.as_deref() != Some(CREDIT_TERMS);
    Classification {
        side: entry.side,
        settles_immediately,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryOrigin;

    fn debit(payment_method: Option<&str>) -> LedgerEntry {
        LedgerEntry {
            id: "p-1".to_string(),
            date: None,
            subject_id: "v-1".to_string(),
            side: Side::Debit,
            origin: EntryOrigin::Purchase,
            payment_method: payment_method.map(str::to_string),
            amount: 100.0,
            invoice_no: None,
            reference_number: None,
            description: None,
            company: String::new(),
        }
    }

    #[test]
    fn cash_purchase_folds_into_credit() {
        for method in [Some("Cash"), Some("Bank Transfer"), Some("UPI"), Some("Cheque")] {
            assert!(classify(&debit(method)).settles_immediately);
        }
    }

    #[test]
    fn missing_method_counts_as_settled() {
        assert!(classify(&debit(None)).settles_immediately);
    }

    #[test]
    fn credit_purchase_stays_outstanding() {
        assert!(!classify(&debit(Some(CREDIT_TERMS))).settles_immediately);
    }

    #[test]
    fn credit_side_never_folds() {
        let mut payment = debit(Some("Cash"));
        payment.side = Side::Credit;
        payment.origin = EntryOrigin::Payment;
        let class = classify(&payment);
        assert_eq!(class.side, Side::Credit);
        assert!(!class.settles_immediately);
    }
}
