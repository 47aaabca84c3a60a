//! The module contains the error a ledger fetch can produce.
//!
//! Fetch failures are per-subject values: the batch reconciler collapses
//! them to a skip-and-log at its boundary instead of aborting the run.

use serde::Serialize;
use thiserror::Error;

use crate::{Subject, SubjectKind};

/// A failed ledger fetch for one subject.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{} ledger fetch failed for \"{subject_id}\": {message}", .kind.as_str())]
pub struct FetchError {
    pub subject_id: String,
    pub kind: SubjectKind,
    pub message: String,
}

impl FetchError {
    pub fn new(subject: &Subject, message: impl Into<String>) -> Self {
        Self {
            subject_id: subject.id.clone(),
            kind: subject.kind,
            message: message.into(),
        }
    }
}
