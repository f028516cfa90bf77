//! Inbound and outbound shipment handlers
//!
//! Inbound saves and deletes run their derivation inside the same write
//! lock, so the ledger is never observably out of step with the
//! shipment register. Outbound shipments have no journal derivation;
//! their money story is the profit figure on the record itself.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::{InboundId, Money, OutboundId};
use domain_derivation::SourceEvent;
use domain_events::{InboundRegister, InboundShipment, OutboundRegister, OutboundShipment};

use crate::dto::shipment::{
    InboundListResponse, InboundRequest, OutboundListResponse, OutboundRequest, ShipmentListQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Lists inbound shipments with totals, optionally filtered by a
/// search query over resi, vendor, and destination
pub async fn list_inbound(
    State(state): State<AppState>,
    Query(query): Query<ShipmentListQuery>,
) -> Result<Json<InboundListResponse>, ApiError> {
    let office = state.back_office.read().await;
    let shipments: Vec<InboundShipment> = match query.q.as_deref() {
        Some(q) => office.inbound.search(q).into_iter().cloned().collect(),
        None => office.inbound.list().into_iter().cloned().collect(),
    };
    let summary = InboundRegister::summarize(shipments.iter());
    Ok(Json(InboundListResponse { shipments, summary }))
}

pub async fn create_inbound(
    State(state): State<AppState>,
    Json(request): Json<InboundRequest>,
) -> Result<(StatusCode, Json<InboundShipment>), ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut shipment = InboundShipment::new("", Money::zero());
    request.apply(&mut shipment);
    office.inbound.insert(shipment.clone())?;
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Inbound(&shipment))?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

pub async fn get_inbound(
    State(state): State<AppState>,
    Path(id): Path<InboundId>,
) -> Result<Json<InboundShipment>, ApiError> {
    let office = state.back_office.read().await;
    let shipment = office
        .inbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("inbound shipment not found".to_string()))?;
    Ok(Json(shipment))
}

pub async fn update_inbound(
    State(state): State<AppState>,
    Path(id): Path<InboundId>,
    Json(request): Json<InboundRequest>,
) -> Result<Json<InboundShipment>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut shipment = office
        .inbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("inbound shipment not found".to_string()))?;
    let previous = shipment.clone();
    request.apply(&mut shipment);
    office.inbound.update(shipment.clone())?;
    // A changed resi changes the derivation key; retract under the old
    // one so no orphaned entry survives the rename.
    if previous.resi != shipment.resi {
        office
            .derivations
            .on_delete(&mut office.ledger, SourceEvent::Inbound(&previous))?;
    }
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Inbound(&shipment))?;
    // A cost edit must flow into the invoice the shipment sits on
    if let Some(invoice_id) = shipment.invoice_id {
        office.invoices.recompute_total(&office.inbound, invoice_id)?;
    }
    Ok(Json(shipment))
}

pub async fn delete_inbound(
    State(state): State<AppState>,
    Path(id): Path<InboundId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let removed = office.inbound.remove(id)?;
    office
        .derivations
        .on_delete(&mut office.ledger, SourceEvent::Inbound(&removed))?;
    office
        .invoices
        .on_shipment_removed(&office.inbound, removed.invoice_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists outbound shipments with revenue/cost/profit totals
pub async fn list_outbound(
    State(state): State<AppState>,
    Query(query): Query<ShipmentListQuery>,
) -> Result<Json<OutboundListResponse>, ApiError> {
    let office = state.back_office.read().await;
    let shipments: Vec<OutboundShipment> = match query.q.as_deref() {
        Some(q) => office.outbound.search(q).into_iter().cloned().collect(),
        None => office.outbound.list().into_iter().cloned().collect(),
    };
    let summary = OutboundRegister::summarize(shipments.iter());
    Ok(Json(OutboundListResponse { shipments, summary }))
}

pub async fn create_outbound(
    State(state): State<AppState>,
    Json(request): Json<OutboundRequest>,
) -> Result<(StatusCode, Json<OutboundShipment>), ApiError> {
    let mut office = state.back_office.write().await;
    let mut shipment = OutboundShipment::new("", Money::zero());
    request.apply(&mut shipment);
    let id = office.outbound.insert(shipment)?;
    let shipment = office
        .outbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal("shipment vanished after insert".to_string()))?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

pub async fn get_outbound(
    State(state): State<AppState>,
    Path(id): Path<OutboundId>,
) -> Result<Json<OutboundShipment>, ApiError> {
    let office = state.back_office.read().await;
    let shipment = office
        .outbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("outbound shipment not found".to_string()))?;
    Ok(Json(shipment))
}

pub async fn update_outbound(
    State(state): State<AppState>,
    Path(id): Path<OutboundId>,
    Json(request): Json<OutboundRequest>,
) -> Result<Json<OutboundShipment>, ApiError> {
    let mut office = state.back_office.write().await;
    let mut shipment = office
        .outbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("outbound shipment not found".to_string()))?;
    request.apply(&mut shipment);
    office.outbound.update(shipment)?;
    let shipment = office
        .outbound
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal("shipment vanished after update".to_string()))?;
    Ok(Json(shipment))
}

pub async fn delete_outbound(
    State(state): State<AppState>,
    Path(id): Path<OutboundId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    office.outbound.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
