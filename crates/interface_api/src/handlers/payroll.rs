//! Cash advance and payroll handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use core_kernel::{CashAdvanceId, EmployeeId, Money, PayrollId};
use domain_derivation::SourceEvent;
use domain_events::{CashAdvance, PayrollRun};

use crate::dto::payroll::{CashAdvanceRequest, PayrollListQuery, PayrollRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_cash_advances(
    State(state): State<AppState>,
) -> Result<Json<Vec<CashAdvance>>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(office.cash_advances.list().into_iter().cloned().collect()))
}

pub async fn create_cash_advance(
    State(state): State<AppState>,
    Json(request): Json<CashAdvanceRequest>,
) -> Result<(StatusCode, Json<CashAdvance>), ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut advance = CashAdvance::new(
        EmployeeId::new_v7(),
        "",
        Utc::now().date_naive(),
        Money::zero(),
    );
    request.apply(&mut advance);
    office.cash_advances.insert(advance.clone())?;
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::CashAdvance(&advance))?;
    Ok((StatusCode::CREATED, Json(advance)))
}

pub async fn update_cash_advance(
    State(state): State<AppState>,
    Path(id): Path<CashAdvanceId>,
    Json(request): Json<CashAdvanceRequest>,
) -> Result<Json<CashAdvance>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut advance = office
        .cash_advances
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("cash advance not found".to_string()))?;
    request.apply(&mut advance);
    office.cash_advances.update(advance.clone())?;
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::CashAdvance(&advance))?;
    Ok(Json(advance))
}

pub async fn delete_cash_advance(
    State(state): State<AppState>,
    Path(id): Path<CashAdvanceId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let removed = office.cash_advances.remove(id)?;
    office
        .derivations
        .on_delete(&mut office.ledger, SourceEvent::CashAdvance(&removed))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists payroll runs, optionally narrowed to one period
pub async fn list_payroll(
    State(state): State<AppState>,
    Query(query): Query<PayrollListQuery>,
) -> Result<Json<Vec<PayrollRun>>, ApiError> {
    let office = state.back_office.read().await;
    let runs = match (query.year, query.month) {
        (Some(year), Some(month)) => office.payroll.for_period(year, month),
        _ => office.payroll.list(),
    };
    Ok(Json(runs.into_iter().cloned().collect()))
}

pub async fn create_payroll(
    State(state): State<AppState>,
    Json(request): Json<PayrollRequest>,
) -> Result<(StatusCode, Json<PayrollRun>), ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut run = PayrollRun::new(EmployeeId::new_v7(), "", 0, 1, Money::zero());
    request.apply(&mut run);
    let id = office.payroll.insert(run)?;
    let run = office
        .payroll
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal("payroll run vanished after insert".to_string()))?;
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Payroll(&run))?;
    Ok((StatusCode::CREATED, Json(run)))
}

pub async fn get_payroll(
    State(state): State<AppState>,
    Path(id): Path<PayrollId>,
) -> Result<Json<PayrollRun>, ApiError> {
    let office = state.back_office.read().await;
    let run = office
        .payroll
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("payroll run not found".to_string()))?;
    Ok(Json(run))
}

pub async fn update_payroll(
    State(state): State<AppState>,
    Path(id): Path<PayrollId>,
    Json(request): Json<PayrollRequest>,
) -> Result<Json<PayrollRun>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut run = office
        .payroll
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("payroll run not found".to_string()))?;
    let previous = run.clone();
    request.apply(&mut run);
    office.payroll.update(run)?;
    let run = office
        .payroll
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal("payroll run vanished after update".to_string()))?;
    // Moving a run to another employee or period changes its key
    // prefix; clear the entries filed under the old one.
    if previous.employee_id != run.employee_id
        || previous.year != run.year
        || previous.month != run.month
    {
        office
            .derivations
            .on_delete(&mut office.ledger, SourceEvent::Payroll(&previous))?;
    }
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Payroll(&run))?;
    Ok(Json(run))
}

pub async fn delete_payroll(
    State(state): State<AppState>,
    Path(id): Path<PayrollId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let removed = office.payroll.remove(id)?;
    office
        .derivations
        .on_delete(&mut office.ledger, SourceEvent::Payroll(&removed))?;
    Ok(StatusCode::NO_CONTENT)
}
