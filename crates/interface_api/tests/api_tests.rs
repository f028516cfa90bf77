//! HTTP-level tests over the full router

use axum_test::TestServer;
use serde_json::{json, Value};

use interface_api::config::ApiConfig;
use interface_api::state::{AppState, BackOffice};
use interface_api::create_router;

fn server() -> TestServer {
    let back_office = BackOffice::with_standard_chart().unwrap();
    let state = AppState::new(back_office, ApiConfig::default());
    TestServer::new(create_router(state)).unwrap()
}

fn empty_server() -> TestServer {
    let state = AppState::new(BackOffice::new(), ApiConfig::default());
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_standard_chart_is_seeded() {
    let server = server();
    let accounts: Value = server.get("/api/v1/accounts").await.json();
    let codes: Vec<&str> = accounts
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"111"));
    assert!(codes.contains(&"411"));
    assert_eq!(codes.len(), 11);
}

#[tokio::test]
async fn test_duplicate_account_code_conflicts() {
    let server = server();
    let response = server
        .post("/api/v1/accounts")
        .json(&json!({ "code": "111", "name": "Kas Kedua", "category": "ASSET" }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_manual_journal_and_trial_balance() {
    let server = server();
    let response = server
        .post("/api/v1/journal")
        .json(&json!({
            "date": "2026-08-01",
            "description": "Setoran modal awal",
            "debit_code": "111",
            "credit_code": "311",
            "amount": "5000000"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let trial: Value = server.get("/api/v1/reports/trial-balance").await.json();
    assert_eq!(trial["total_debit"], trial["total_credit"]);
    assert_eq!(trial["difference"], "0");
}

#[tokio::test]
async fn test_non_positive_manual_entry_rejected() {
    let server = server();
    let response = server
        .post("/api/v1/journal")
        .json(&json!({
            "date": "2026-08-01",
            "description": "Nol",
            "debit_code": "111",
            "credit_code": "311",
            "amount": "0"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_referenced_account_cannot_be_deleted() {
    let server = server();
    server
        .post("/api/v1/journal")
        .json(&json!({
            "date": "2026-08-01",
            "description": "Setoran",
            "debit_code": "111",
            "credit_code": "311",
            "amount": "1000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let accounts: Value = server.get("/api/v1/accounts").await.json();
    let kas_id = accounts
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["code"] == "111")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.delete(&format!("/api/v1/accounts/{kas_id}")).await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_inbound_save_derives_journal_entry() {
    let server = server();
    server
        .post("/api/v1/shipments/inbound")
        .json(&json!({
            "resi": "BMM-001",
            "stt_date": "2026-08-02",
            "total_cost": "450000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let entries: Value = server.get("/api/v1/journal").await.json();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["derivation_key"], "inbound/BMM-001");
    assert_eq!(entries[0]["debit_code"], "113");
    assert_eq!(entries[0]["credit_code"], "411");
    assert_eq!(entries[0]["amount"], "450000");
}

#[tokio::test]
async fn test_inbound_delete_retracts_entry() {
    let server = server();
    let created: Value = server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-001", "total_cost": "450000" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    server
        .delete(&format!("/api/v1/shipments/inbound/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let entries: Value = server.get("/api/v1/journal").await.json();
    assert!(entries.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_resi_conflicts() {
    let server = server();
    let body = json!({ "resi": "BMM-001", "total_cost": "100" });
    server
        .post("/api/v1/shipments/inbound")
        .json(&body)
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/v1/shipments/inbound")
        .json(&body)
        .await
        .assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_manifest_flow_and_income_statement() {
    let server = server();
    server
        .post("/api/v1/manifests")
        .json(&json!({
            "category": "HULU",
            "resi": "MAN-1",
            "ship_date": "2026-08-03",
            "total": "750000",
            "advance": "200000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let entries: Value = server.get("/api/v1/journal").await.json();
    assert_eq!(entries.as_array().unwrap().len(), 2);

    // Revenue to make the statement non-trivial
    server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-1", "total_cost": "1000000" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let income: Value = server.get("/api/v1/reports/income-statement").await.json();
    assert_eq!(income["total_revenue"], "1000000");
    assert_eq!(income["withholding_tax"], "20000");
    assert_eq!(income["gross_after_tax"], "980000");
    // Freight expense counts the payable and the advance legs
    assert_eq!(income["total_expense"], "950000");
    assert_eq!(income["net_income"], "30000");
}

#[tokio::test]
async fn test_payroll_derivation_and_general_ledger() {
    let server = server();
    server
        .post("/api/v1/payroll")
        .json(&json!({
            "employee_name": "Budi",
            "year": 2026,
            "month": 8,
            "base_pay": "3000000",
            "advance_deduction": "500000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let entries: Value = server.get("/api/v1/journal").await.json();
    assert_eq!(entries.as_array().unwrap().len(), 2);

    let accounts: Value = server.get("/api/v1/accounts").await.json();
    let wages_id = accounts
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["code"] == "512")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let detail: Value = server
        .get(&format!("/api/v1/reports/general-ledger/{wages_id}"))
        .await
        .json();
    let rows = detail["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.last().unwrap()["running_balance"], "3000000");
}

#[tokio::test]
async fn test_failed_derivation_is_queryable() {
    let server = empty_server();
    server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-9", "total_cost": "100000" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let entries: Value = server.get("/api/v1/journal").await.json();
    assert!(entries.as_array().unwrap().is_empty());

    let failures: Value = server.get("/api/v1/reports/failed-derivations").await.json();
    let failures = failures.as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["derivation_key"], "inbound/BMM-9");
}

#[tokio::test]
async fn test_invoice_lifecycle() {
    let server = server();
    let first: Value = server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-1", "total_cost": "450000" }))
        .await
        .json();
    let second: Value = server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-2", "total_cost": "250000" }))
        .await
        .json();

    let invoice: Value = server
        .post("/api/v1/invoices")
        .json(&json!({
            "customer": "PT Khatulistiwa",
            "issue_date": "2026-08-10",
            "shipment_ids": [first["id"], second["id"]]
        }))
        .await
        .json();
    assert_eq!(invoice["number"], "01/INV/BMM/VIII/2026");
    assert_eq!(invoice["total"], "700000");

    // Editing a member's cost re-derives the total
    let updated: Value = server
        .put(&format!(
            "/api/v1/shipments/inbound/{}",
            first["id"].as_str().unwrap()
        ))
        .json(&json!({ "resi": "BMM-1", "total_cost": "500000" }))
        .await
        .json();
    assert_eq!(updated["total_cost"], "500000");

    let invoice_id = invoice["id"].as_str().unwrap();
    let refreshed: Value = server.get(&format!("/api/v1/invoices/{invoice_id}")).await.json();
    assert_eq!(refreshed["total"], "750000");

    // Deleting the invoice frees the shipments
    server
        .delete(&format!("/api/v1/invoices/{invoice_id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    let unbilled: Value = server.get("/api/v1/invoices/unbilled").await.json();
    assert_eq!(unbilled.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cashbook_running_balance() {
    let server = server();
    server
        .post("/api/v1/cashbook")
        .json(&json!({
            "date": "2026-08-01",
            "description": "Setoran tunai",
            "inflow": "500000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/v1/cashbook")
        .json(&json!({
            "date": "2026-08-02",
            "description": "Bayar listrik",
            "outflow": "150000"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let listing: Value = server.get("/api/v1/cashbook").await.json();
    let lines = listing["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["running_balance"], "350000");
    assert_eq!(listing["summary"]["closing_balance"], "350000");

    // The cash book never reaches the ledger
    let entries: Value = server.get("/api/v1/journal").await.json();
    assert!(entries.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_shows_recent_entries() {
    let server = server();
    server
        .post("/api/v1/shipments/inbound")
        .json(&json!({ "resi": "BMM-1", "total_cost": "1000000" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let dashboard: Value = server.get("/api/v1/reports/dashboard").await.json();
    assert_eq!(dashboard["total_revenue"], "1000000");
    assert_eq!(dashboard["net_income"], "980000");
    assert_eq!(dashboard["recent_entries"].as_array().unwrap().len(), 1);
}
