//! Statement and report handlers
//!
//! All reports are read-only and recomputed per request.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::AccountId;
use domain_derivation::FailedDerivation;
use domain_ledger::{
    balance_sheet, cash_flow, dashboard, general_ledger, income_statement, trial_balance,
    BalanceSheet, CashFlowStatement, GeneralLedgerDetail, IncomeStatement, TrialBalance,
};

use crate::dto::journal::EntryResponse;
use crate::dto::report::{DashboardResponse, PeriodQuery};
use crate::error::ApiError;
use crate::state::AppState;

fn period(query: &PeriodQuery) -> Result<core_kernel::ReportingPeriod, ApiError> {
    query
        .period()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

pub async fn get_trial_balance(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<TrialBalance>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(trial_balance(&office.ledger, period(&query)?)?))
}

pub async fn get_income_statement(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<IncomeStatement>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(income_statement(&office.ledger, period(&query)?)?))
}

pub async fn get_balance_sheet(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<BalanceSheet>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(balance_sheet(&office.ledger, period(&query)?)?))
}

pub async fn get_cash_flow(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<CashFlowStatement>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(cash_flow(&office.ledger, period(&query)?)?))
}

/// Running-balance transaction listing for one account
pub async fn get_general_ledger(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<GeneralLedgerDetail>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(general_ledger(&office.ledger, account_id)?))
}

/// Summary cards plus the five most recent entries
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let office = state.back_office.read().await;
    let summary = dashboard(&office.ledger)?;
    let recent_entries = office
        .ledger
        .recent_entries(5)
        .into_iter()
        .map(|entry| EntryResponse::from_entry(&office.ledger, entry))
        .collect();
    Ok(Json(DashboardResponse {
        summary,
        recent_entries,
    }))
}

/// Derivations skipped because an account could not be resolved
pub async fn list_failed_derivations(
    State(state): State<AppState>,
) -> Result<Json<Vec<FailedDerivation>>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(office.derivations.failures().to_vec()))
}
