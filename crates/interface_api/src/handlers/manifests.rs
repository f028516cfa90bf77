//! Manifest handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::{ManifestId, Money};
use domain_derivation::SourceEvent;
use domain_events::{Manifest, ManifestRegister, RouteCategory};

use crate::dto::manifest::{ManifestListQuery, ManifestListResponse, ManifestRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Lists manifests with outstanding/settled totals, optionally
/// filtered by route category and payment state
pub async fn list_manifests(
    State(state): State<AppState>,
    Query(query): Query<ManifestListQuery>,
) -> Result<Json<ManifestListResponse>, ApiError> {
    let office = state.back_office.read().await;
    let manifests: Vec<Manifest> = office
        .manifests
        .filter(query.category, query.paid)
        .into_iter()
        .cloned()
        .collect();
    let summary = ManifestRegister::summarize(manifests.iter());
    Ok(Json(ManifestListResponse { manifests, summary }))
}

pub async fn create_manifest(
    State(state): State<AppState>,
    Json(request): Json<ManifestRequest>,
) -> Result<(StatusCode, Json<Manifest>), ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut manifest = Manifest::new(RouteCategory::Hulu, "", Money::zero());
    request.apply(&mut manifest);
    office.manifests.insert(manifest.clone())?;
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Manifest(&manifest))?;
    Ok((StatusCode::CREATED, Json(manifest)))
}

pub async fn get_manifest(
    State(state): State<AppState>,
    Path(id): Path<ManifestId>,
) -> Result<Json<Manifest>, ApiError> {
    let office = state.back_office.read().await;
    let manifest = office
        .manifests
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("manifest not found".to_string()))?;
    Ok(Json(manifest))
}

pub async fn update_manifest(
    State(state): State<AppState>,
    Path(id): Path<ManifestId>,
    Json(request): Json<ManifestRequest>,
) -> Result<Json<Manifest>, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let mut manifest = office
        .manifests
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("manifest not found".to_string()))?;
    let previous = manifest.clone();
    request.apply(&mut manifest);
    office.manifests.update(manifest.clone())?;
    // Resi or route edits change both derivation keys; retract under
    // the old identity first.
    if previous.resi != manifest.resi || previous.category != manifest.category {
        office
            .derivations
            .on_delete(&mut office.ledger, SourceEvent::Manifest(&previous))?;
    }
    office
        .derivations
        .on_save(&mut office.ledger, SourceEvent::Manifest(&manifest))?;
    Ok(Json(manifest))
}

pub async fn delete_manifest(
    State(state): State<AppState>,
    Path(id): Path<ManifestId>,
) -> Result<StatusCode, ApiError> {
    let mut office = state.back_office.write().await;
    let office = &mut *office;

    let removed = office.manifests.remove(id)?;
    office
        .derivations
        .on_delete(&mut office.ledger, SourceEvent::Manifest(&removed))?;
    Ok(StatusCode::NO_CONTENT)
}
