//! Invoice handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::InvoiceId;
use domain_events::InboundShipment;
use domain_receivable::Invoice;

use crate::dto::invoice::{CreateInvoiceRequest, MembershipRequest, SetStatusRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(office.invoices.list().into_iter().cloned().collect()))
}

/// Shipments not yet on any invoice
pub async fn list_unbilled(
    State(state): State<AppState>,
) -> Result<Json<Vec<InboundShipment>>, ApiError> {
    let office = state.back_office.read().await;
    Ok(Json(office.inbound.unbilled().into_iter().cloned().collect()))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let id = office.invoices.create_invoice(
        &mut office.inbound,
        request.customer,
        request.issue_date,
        request.due_date,
        &request.shipment_ids,
    )?;
    let invoice = office
        .invoices
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal("invoice vanished after creation".to_string()))?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<Invoice>, ApiError> {
    let office = state.back_office.read().await;
    let invoice = office
        .invoices
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("invoice not found".to_string()))?;
    Ok(Json(invoice))
}

pub async fn set_invoice_status(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<Invoice>, ApiError> {
    let mut office = state.back_office.write().await;
    office.invoices.set_status(id, request.status)?;
    let invoice = office
        .invoices
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("invoice not found".to_string()))?;
    Ok(Json(invoice))
}

pub async fn attach_shipment(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<Invoice>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    office
        .invoices
        .attach(&mut office.inbound, id, request.shipment_id)?;
    let invoice = office
        .invoices
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("invoice not found".to_string()))?;
    Ok(Json(invoice))
}

pub async fn detach_shipment(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<Invoice>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    office
        .invoices
        .detach(&mut office.inbound, id, request.shipment_id)?;
    let invoice = office
        .invoices
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("invoice not found".to_string()))?;
    Ok(Json(invoice))
}

/// Deletes the invoice; member shipments are detached, not deleted
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    office.invoices.delete_invoice(&mut office.inbound, id)?;
    Ok(StatusCode::NO_CONTENT)
}
