//! Ledger reconciliation engine.
//!
//! Turns the raw two-sided payables ledgers served by the persistence
//! service into canonical [`LedgerEntry`] values, computes per-subject
//! [`SubjectTotals`] and cross-subject [`GrandTotals`], and exposes the
//! [`LedgerSource`] seam the HTTP client plugs into.
//!
//! The engine itself performs no I/O and never mutates the origin records:
//! ledgers are recomputed from scratch on every query.

pub use api_types::ledger::{DateRange, RawEntry, RawLedger};
pub use api_types::subject::{Subject, SubjectKind};

pub use aggregate::{NetPosition, SettlementStatus, SubjectTotals, aggregate};
pub use classify::{CREDIT_TERMS, Classification, classify};
pub use entry::{EntryOrigin, LedgerEntry, Side};
pub use error::FetchError;
pub use normalize::{first_usable, normalize, normalize_ledger};
pub use reconcile::{
    GrandTotals, LedgerFilter, LedgerSource, Reconciliation, SubjectLedger, reconcile_all,
    reconcile_subject,
};

mod aggregate;
mod classify;
mod entry;
mod error;
pub mod money;
mod normalize;
mod reconcile;
