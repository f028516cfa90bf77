//! HTTP API Layer
//!
//! REST interface over the back-office core using Axum.
//!
//! Every mutating route takes the write lock on the shared state for
//! its whole duration, so a source-event save and the journal entries
//! it derives are one atomic step from any observer's point of view.
//! Report routes take the read lock and recompute from scratch.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, state::{AppState, BackOffice}, config::ApiConfig};
//!
//! let state = AppState::new(BackOffice::with_standard_chart()?, ApiConfig::default());
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    accounts, cashbook, health, invoices, journal, manifests, payroll, reports, shipments,
};
pub use crate::state::AppState;

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let account_routes = Router::new()
        .route("/", post(accounts::create_account))
        .route("/", get(accounts::list_accounts))
        .route("/:id", get(accounts::get_account))
        .route("/:id", put(accounts::update_account))
        .route("/:id", delete(accounts::delete_account));

    let journal_routes = Router::new()
        .route("/", post(journal::create_entry))
        .route("/", get(journal::list_entries))
        .route("/:id", put(journal::update_entry))
        .route("/:id", delete(journal::delete_entry));

    let report_routes = Router::new()
        .route("/trial-balance", get(reports::get_trial_balance))
        .route("/income-statement", get(reports::get_income_statement))
        .route("/balance-sheet", get(reports::get_balance_sheet))
        .route("/cash-flow", get(reports::get_cash_flow))
        .route("/general-ledger/:account_id", get(reports::get_general_ledger))
        .route("/dashboard", get(reports::get_dashboard))
        .route("/failed-derivations", get(reports::list_failed_derivations));

    let inbound_routes = Router::new()
        .route("/", post(shipments::create_inbound))
        .route("/", get(shipments::list_inbound))
        .route("/:id", get(shipments::get_inbound))
        .route("/:id", put(shipments::update_inbound))
        .route("/:id", delete(shipments::delete_inbound));

    let outbound_routes = Router::new()
        .route("/", post(shipments::create_outbound))
        .route("/", get(shipments::list_outbound))
        .route("/:id", get(shipments::get_outbound))
        .route("/:id", put(shipments::update_outbound))
        .route("/:id", delete(shipments::delete_outbound));

    let manifest_routes = Router::new()
        .route("/", post(manifests::create_manifest))
        .route("/", get(manifests::list_manifests))
        .route("/:id", get(manifests::get_manifest))
        .route("/:id", put(manifests::update_manifest))
        .route("/:id", delete(manifests::delete_manifest));

    let cash_advance_routes = Router::new()
        .route("/", post(payroll::create_cash_advance))
        .route("/", get(payroll::list_cash_advances))
        .route("/:id", put(payroll::update_cash_advance))
        .route("/:id", delete(payroll::delete_cash_advance));

    let payroll_routes = Router::new()
        .route("/", post(payroll::create_payroll))
        .route("/", get(payroll::list_payroll))
        .route("/:id", get(payroll::get_payroll))
        .route("/:id", put(payroll::update_payroll))
        .route("/:id", delete(payroll::delete_payroll));

    let cashbook_routes = Router::new()
        .route("/", post(cashbook::create_cashbook_entry))
        .route("/", get(cashbook::list_cashbook))
        .route("/:id", put(cashbook::update_cashbook_entry))
        .route("/:id", delete(cashbook::delete_cashbook_entry));

    let invoice_routes = Router::new()
        .route("/", post(invoices::create_invoice))
        .route("/", get(invoices::list_invoices))
        .route("/unbilled", get(invoices::list_unbilled))
        .route("/:id", get(invoices::get_invoice))
        .route("/:id", delete(invoices::delete_invoice))
        .route("/:id/status", put(invoices::set_invoice_status))
        .route("/:id/attach", post(invoices::attach_shipment))
        .route("/:id/detach", post(invoices::detach_shipment));

    let api_routes = Router::new()
        .nest("/accounts", account_routes)
        .nest("/journal", journal_routes)
        .nest("/reports", report_routes)
        .nest("/shipments/inbound", inbound_routes)
        .nest("/shipments/outbound", outbound_routes)
        .nest("/manifests", manifest_routes)
        .nest("/cash-advances", cash_advance_routes)
        .nest("/payroll", payroll_routes)
        .nest("/cashbook", cashbook_routes)
        .nest("/invoices", invoice_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
