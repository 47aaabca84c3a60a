//! HTTP client for the payables ledger endpoints.
//!
//! Implements the engine's [`LedgerSource`] seam over the persistence
//! service's two read endpoints. Transport failures and non-success
//! statuses collapse into per-subject [`FetchError`] values; the batch
//! reconciler decides what to do with them.

use engine::{FetchError, LedgerFilter, LedgerSource, RawLedger, Subject, SubjectKind};
use reqwest::Client;

const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Client for `GET /ledger/vendor-payables` and
/// `GET /ledger/expense-payables`.
#[derive(Clone, Debug)]
pub struct PayablesClient {
    server: String,
    client: Client,
}

impl PayablesClient {
    pub fn new(server: &str) -> Self {
        Self::with_client(server, Client::new())
    }

    /// Build with a preconfigured `reqwest` client (shared pools, proxies).
    pub fn with_client(server: &str, client: Client) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl LedgerSource for PayablesClient {
    async fn fetch(
        &self,
        subject: &Subject,
        filter: &LedgerFilter,
    ) -> Result<RawLedger, FetchError> {
        let (path, id_param) = match subject.kind {
            SubjectKind::Vendor => ("vendor-payables", "vendorId"),
            SubjectKind::Expense => ("expense-payables", "expenseId"),
        };
        let url = format!("{}/ledger/{path}", self.server);

        let mut query: Vec<(&str, String)> = vec![(id_param, subject.id.clone())];
        if let Some(range) = &filter.range {
            query.push(("fromDate", range.from.format(DATE_PARAM_FORMAT).to_string()));
            query.push(("toDate", range.to.format(DATE_PARAM_FORMAT).to_string()));
        }
        if let Some(company) = &filter.company {
            query.push(("companyId", company.clone()));
        }

        tracing::debug!("GET {url} for subject {}", subject.id);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|err| FetchError::new(subject, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            match response.text().await {
                Ok(body) => tracing::debug!("body: {body}"),
                Err(err) => tracing::debug!("body read failed: {err}"),
            }
            return Err(FetchError::new(
                subject,
                format!("unexpected status {status}"),
            ));
        }

        response
            .json::<RawLedger>()
            .await
            .map_err(|err| FetchError::new(subject, format!("invalid response body: {err}")))
    }
}
