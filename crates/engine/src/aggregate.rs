//! Per-subject aggregation and the two status conventions.
//!
//! The detail view derives status from `debit - credit` while bulk
//! summaries derive it from `credit - debit`. The inversion is inherited
//! from the origin system and is reproduced here on purpose; see
//! [`SettlementStatus`] vs [`NetPosition`].

use serde::Serialize;

use crate::{LedgerEntry, Side, classify};

/// Totals for a single vendor or expense head.
///
/// All sums stay floating decimal; rounding happens only at display
/// formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SubjectTotals {
    /// Sum of all debit-side amounts, regardless of payment method.
    pub debit_total: f64,
    /// Sum of immediately-settled debit entries plus all credit-side
    /// entries.
    pub credit_total: f64,
    /// `debit_total - credit_total`.
    pub balance: f64,
}

impl SubjectTotals {
    /// Detail-view status, derived from `debit - credit`.
    pub fn status(&self) -> SettlementStatus {
        SettlementStatus::from_balance(self.balance)
    }
}

/// Detail-view status: positive balance means money is owed to the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SettlementStatus {
    Payable,
    Advance,
    Settled,
}

impl SettlementStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance > 0.0 {
            Self::Payable
        } else if balance < 0.0 {
            Self::Advance
        } else {
            Self::Settled
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payable => "Payable",
            Self::Advance => "Advance",
            Self::Settled => "Settled",
        }
    }
}

/// Bulk-summary position, derived from `credit - debit` (sign inverted
/// relative to [`SettlementStatus`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NetPosition {
    TotalPayable,
    NetAdvance,
    Settled,
}

impl NetPosition {
    pub fn from_net(net: f64) -> Self {
        if net > 0.0 {
            Self::NetAdvance
        } else if net < 0.0 {
            Self::TotalPayable
        } else {
            Self::Settled
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TotalPayable => "Total Payable",
            Self::NetAdvance => "Net Advance",
            Self::Settled => "Settled",
        }
    }
}

/// Sums one subject's entries into [`SubjectTotals`].
pub fn aggregate(entries: &[LedgerEntry]) -> SubjectTotals {
    let mut totals = SubjectTotals::default();
    for entry in entries {
        let class = classify(entry);
        match class.side {
            Side::Debit => {
                totals.debit_total += entry.amount;
                if class.settles_immediately {
                    totals.credit_total += entry.amount;
                }
            }
            Side::Credit => totals.credit_total += entry.amount,
        }
    }
    totals.balance = totals.debit_total - totals.credit_total;
    totals
}
