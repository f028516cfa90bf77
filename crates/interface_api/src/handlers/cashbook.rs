//! Daily cash book handlers
//!
//! The cash book never touches the ledger; no derivation runs here.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use core_kernel::CashbookId;
use domain_events::CashbookEntry;

use crate::dto::cashbook::{CashbookListResponse, CashbookRequest};
use crate::dto::report::PeriodQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Running-balance listing over an optional date window
pub async fn list_cashbook(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<CashbookListResponse>, ApiError> {
    let period = query
        .period()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let office = state.back_office.read().await;
    Ok(Json(CashbookListResponse {
        lines: office.cashbook.listing(period),
        summary: office.cashbook.summary(period),
    }))
}

pub async fn create_cashbook_entry(
    State(state): State<AppState>,
    Json(request): Json<CashbookRequest>,
) -> Result<(StatusCode, Json<CashbookEntry>), ApiError> {
    let mut office = state.back_office.write().await;
    let mut entry = CashbookEntry::new(Utc::now().date_naive(), "");
    request.apply(&mut entry);
    office.cashbook.insert(entry.clone())?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_cashbook_entry(
    State(state): State<AppState>,
    Path(id): Path<CashbookId>,
    Json(request): Json<CashbookRequest>,
) -> Result<Json<CashbookEntry>, ApiError> {
    let mut office = state.back_office.write().await;
    let mut entry = office
        .cashbook
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("cash book entry not found".to_string()))?;
    request.apply(&mut entry);
    office.cashbook.update(entry.clone())?;
    Ok(Json(entry))
}

pub async fn delete_cashbook_entry(
    State(state): State<AppState>,
    Path(id): Path<CashbookId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    office.cashbook.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
