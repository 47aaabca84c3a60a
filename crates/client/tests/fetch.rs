use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use chrono::NaiveDate;
use client::PayablesClient;
use engine::{DateRange, LedgerFilter, LedgerSource, Subject, SubjectKind};
use serde_json::json;

type SeenParams = Arc<Mutex<Option<HashMap<String, String>>>>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn recording_router(path: &str, seen: SeenParams) -> Router {
    Router::new().route(
        path,
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = Some(params);
                Json(json!({
                    "debit": [
                        {"id": "p-1", "amount": 1000.0, "paymentMethod": "Credit", "date": "2024-01-10"}
                    ],
                    "credit": [
                        {"id": "pay-1", "amount": 400.0, "date": "2024-01-20"}
                    ]
                }))
            }
        }),
    )
}

#[tokio::test]
async fn vendor_fetch_parses_both_sides() {
    let seen: SeenParams = Arc::new(Mutex::new(None));
    let server = serve(recording_router("/ledger/vendor-payables", seen.clone())).await;

    let client = PayablesClient::new(&server);
    let subject = Subject::new("v-1", "Acme Traders", SubjectKind::Vendor);
    let ledger = client
        .fetch(&subject, &LedgerFilter::default())
        .await
        .unwrap();

    assert_eq!(ledger.debit.len(), 1);
    assert_eq!(ledger.credit.len(), 1);
    assert_eq!(ledger.debit[0].amount, Some(1000.0));

    let params = seen.lock().unwrap().clone().unwrap();
    assert_eq!(params.get("vendorId").map(String::as_str), Some("v-1"));
    assert!(!params.contains_key("fromDate"));
    assert!(!params.contains_key("companyId"));
}

#[tokio::test]
async fn expense_fetch_uses_expense_id_and_forwards_scope() {
    let seen: SeenParams = Arc::new(Mutex::new(None));
    let server = serve(recording_router("/ledger/expense-payables", seen.clone())).await;

    let client = PayablesClient::new(&server);
    let subject = Subject::new("e-7", "Office Rent", SubjectKind::Expense);
    let filter = LedgerFilter {
        range: Some(DateRange {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        }),
        company: Some("co-1".to_string()),
    };
    client.fetch(&subject, &filter).await.unwrap();

    let params = seen.lock().unwrap().clone().unwrap();
    assert_eq!(params.get("expenseId").map(String::as_str), Some("e-7"));
    assert!(!params.contains_key("vendorId"));
    assert_eq!(params.get("fromDate").map(String::as_str), Some("2024-01-01"));
    assert_eq!(params.get("toDate").map(String::as_str), Some("2024-03-31"));
    assert_eq!(params.get("companyId").map(String::as_str), Some("co-1"));
}

#[tokio::test]
async fn server_error_maps_to_fetch_error() {
    let router = Router::new().route(
        "/ledger/vendor-payables",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let server = serve(router).await;

    let client = PayablesClient::new(&server);
    let subject = Subject::new("v-1", "Acme Traders", SubjectKind::Vendor);
    let err = client
        .fetch(&subject, &LedgerFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err.subject_id, "v-1");
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn malformed_body_maps_to_fetch_error() {
    let router = Router::new().route(
        "/ledger/vendor-payables",
        get(|| async { "not json at all" }),
    );
    let server = serve(router).await;

    let client = PayablesClient::new(&server);
    let subject = Subject::new("v-1", "Acme Traders", SubjectKind::Vendor);
    let err = client
        .fetch(&subject, &LedgerFilter::default())
        .await
        .unwrap_err();
    assert!(err.message.contains("invalid response body"));
}
