//! Chart of accounts handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{AccountId, ReportingPeriod};

use crate::dto::account::{AccountResponse, CreateAccountRequest, UpdateAccountRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Lists all accounts with their all-time balances
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let office = state.back_office.read().await;
    let mut responses = Vec::new();
    for account in office.ledger.accounts_sorted() {
        let balance = office.ledger.balance(account.id, ReportingPeriod::all_time())?;
        responses.push(AccountResponse::from_account(account, balance));
    }
    Ok(Json(responses))
}

/// Registers a new account
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let mut office = state.back_office.write().await;
    let id = office
        .ledger
        .register_account(request.code, request.name, request.category)?;
    let account = office
        .ledger
        .account(id)
        .ok_or_else(|| ApiError::Internal("account vanished after registration".to_string()))?;
    let response = AccountResponse::from_account(account, core_kernel::Money::zero());
    Ok((StatusCode::CREATED, Json(response)))
}

/// Gets one account with its all-time balance
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountResponse>, ApiError> {
    let office = state.back_office.read().await;
    let account = office
        .ledger
        .account(id)
        .ok_or_else(|| ApiError::NotFound("account not found".to_string()))?;
    let balance = office.ledger.balance(id, ReportingPeriod::all_time())?;
    Ok(Json(AccountResponse::from_account(account, balance)))
}

/// Updates an account's code, name, or (while unreferenced) category
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let mut office = state.back_office.write().await;
    office
        .ledger
        .update_account(id, request.code, request.name, request.category)?;
    let account = office
        .ledger
        .account(id)
        .ok_or_else(|| ApiError::NotFound("account not found".to_string()))?;
    let balance = office.ledger.balance(id, ReportingPeriod::all_time())?;
    Ok(Json(AccountResponse::from_account(account, balance)))
}

/// Deletes an unreferenced account
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    office.ledger.remove_account(id)?;
    Ok(StatusCode::NO_CONTENT)
}
