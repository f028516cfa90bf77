//! Manual journal entry handlers
//!
//! Direct entries carry no derivation key; derived entries show up in
//! the same listing but are owned by their source events.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::EntryId;
use domain_ledger::{EntryDraft, EntryUpdate, Ledger};

use crate::dto::journal::{CreateEntryRequest, EntryListQuery, EntryResponse, UpdateEntryRequest};
use crate::error::ApiError;
use crate::state::AppState;

fn account_id_by_code(ledger: &Ledger, code: &str) -> Result<core_kernel::AccountId, ApiError> {
    ledger
        .account_by_code(code)
        .map(|a| a.id)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown account code: {code}")))
}

/// Lists entries, most recent first
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryListQuery>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let office = state.back_office.read().await;
    let limit = query.limit.unwrap_or(usize::MAX);
    let responses = office
        .ledger
        .recent_entries(limit)
        .into_iter()
        .map(|entry| EntryResponse::from_entry(&office.ledger, entry))
        .collect();
    Ok(Json(responses))
}

/// Posts a manual entry
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let mut office = state.back_office.write().await;
    let debit = account_id_by_code(&office.ledger, &request.debit_code)?;
    let credit = account_id_by_code(&office.ledger, &request.credit_code)?;
    let id = office.ledger.post(EntryDraft::new(
        request.date,
        request.description,
        debit,
        credit,
        request.amount,
    ))?;
    let entry = office
        .ledger
        .entry(id)
        .ok_or_else(|| ApiError::Internal("entry vanished after posting".to_string()))?;
    let response = EntryResponse::from_entry(&office.ledger, entry);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Updates an entry in place
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(request): Json<UpdateEntryRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let mut office = state.back_office.write().await;
    let debit_account = request
        .debit_code
        .as_deref()
        .map(|code| account_id_by_code(&office.ledger, code))
        .transpose()?;
    let credit_account = request
        .credit_code
        .as_deref()
        .map(|code| account_id_by_code(&office.ledger, code))
        .transpose()?;

    office.ledger.update_entry(
        id,
        EntryUpdate {
            date: request.date,
            description: request.description,
            debit_account,
            credit_account,
            amount: request.amount,
        },
    )?;
    let entry = office
        .ledger
        .entry(id)
        .ok_or_else(|| ApiError::NotFound("journal entry not found".to_string()))?;
    let response = EntryResponse::from_entry(&office.ledger, entry);
    Ok(Json(response))
}

/// Deletes an entry
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    office.ledger.delete_entry(id)?;
    Ok(StatusCode::NO_CONTENT)
}
