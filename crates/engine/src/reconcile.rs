//! Single-subject and batch reconciliation.
//!
//! The batch path fetches one subject at a time: bulk exports may iterate
//! over hundreds of vendors and the persistence service is not ours to
//! flood. A failed subject is skipped and recorded, never fatal.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;

use crate::{
    DateRange, FetchError, LedgerEntry, NetPosition, RawLedger, Side, Subject, SubjectTotals,
    aggregate,
    entry::{cmp_descending, sort_ascending},
    normalize_ledger,
};

/// Scope applied uniformly to every fetch in a run.
///
/// Both fields are explicit call parameters; there is no ambient "selected
/// company" state anywhere in the engine.
#[derive(Clone, Debug, Default)]
pub struct LedgerFilter {
    /// Inclusive date range; `None` means all-time.
    pub range: Option<DateRange>,
    /// Owning company scope; `None` means unscoped.
    pub company: Option<String>,
}

/// The seam to the persistence collaborator.
///
/// Implementations fetch the raw two-sided ledger for one subject. The
/// engine owns everything after the fetch.
pub trait LedgerSource {
    fn fetch(
        &self,
        subject: &Subject,
        filter: &LedgerFilter,
    ) -> impl Future<Output = Result<RawLedger, FetchError>> + Send;
}

/// One subject's reconciled ledger: canonical entries in ascending date
/// order plus the aggregated totals.
#[derive(Clone, Debug, Serialize)]
pub struct SubjectLedger {
    pub subject: Subject,
    pub entries: Vec<LedgerEntry>,
    pub totals: SubjectTotals,
}

impl SubjectLedger {
    /// Entries of one side in descending date order, dateless entries
    /// last. Display ordering for the on-screen tables; exports use the
    /// ascending order of `entries`.
    pub fn side_entries(&self, side: Side) -> Vec<&LedgerEntry> {
        let mut entries: Vec<&LedgerEntry> =
            self.entries.iter().filter(|e| e.side == side).collect();
        entries.sort_by(|a, b| cmp_descending(a, b));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cross-subject totals, summed over the subjects that succeeded.
///
/// `total_balance` follows the bulk convention, `credit - debit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct GrandTotals {
    pub total_debit: f64,
    pub total_credit: f64,
    pub total_balance: f64,
    pub subject_count: usize,
}

impl GrandTotals {
    fn from_subjects(subjects: &[SubjectLedger]) -> Self {
        let mut grand = GrandTotals::default();
        for ledger in subjects {
            grand.total_debit += ledger.totals.debit_total;
            grand.total_credit += ledger.totals.credit_total;
        }
        grand.total_balance = grand.total_credit - grand.total_debit;
        grand.subject_count = subjects.len();
        grand
    }

    pub fn position(&self) -> NetPosition {
        NetPosition::from_net(self.total_balance)
    }
}

/// Result of a batch run: per-subject ledgers in input order, grand
/// totals, and the fetch failures that were skipped.
#[derive(Clone, Debug, Serialize)]
pub struct Reconciliation {
    pub subjects: Vec<SubjectLedger>,
    pub grand: GrandTotals,
    pub skipped: Vec<FetchError>,
}

impl Reconciliation {
    pub fn totals_by_subject(&self) -> HashMap<&str, &SubjectTotals> {
        self.subjects
            .iter()
            .map(|ledger| (ledger.subject.id.as_str(), &ledger.totals))
            .collect()
    }

    /// Total entry rows across all succeeded subjects.
    pub fn row_count(&self) -> usize {
        self.subjects.iter().map(|ledger| ledger.entries.len()).sum()
    }

    /// True when every requested subject failed to load.
    pub fn all_failed(&self) -> bool {
        self.subjects.is_empty() && !self.skipped.is_empty()
    }
}

/// Fetches, normalizes and aggregates one subject's ledger.
pub async fn reconcile_subject<S: LedgerSource>(
    source: &S,
    subject: &Subject,
    filter: &LedgerFilter,
) -> Result<SubjectLedger, FetchError> {
    let raw = source.fetch(subject, filter).await?;
    let mut entries = normalize_ledger(&raw, subject.kind, &subject.id);
    sort_ascending(&mut entries);
    let totals = aggregate(&entries);
    Ok(SubjectLedger {
        subject: subject.clone(),
        entries,
        totals,
    })
}

/// Reconciles every subject, in input order, one fetch at a time.
///
/// A subject whose fetch fails is logged and skipped; the batch always
/// runs to completion and the grand totals cover the successes only.
pub async fn reconcile_all<S: LedgerSource>(
    source: &S,
    subjects: &[Subject],
    filter: &LedgerFilter,
) -> Reconciliation {
    let mut succeeded = Vec::with_capacity(subjects.len());
    let mut skipped = Vec::new();

    for subject in subjects {
        match reconcile_subject(source, subject, filter).await {
            Ok(ledger) => succeeded.push(ledger),
            Err(err) => {
                tracing::warn!("skipping subject: {err}");
                skipped.push(err);
            }
        }
    }

    let grand = GrandTotals::from_subjects(&succeeded);
    Reconciliation {
        subjects: succeeded,
        grand,
        skipped,
    }
}
