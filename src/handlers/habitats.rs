// Handlers for /api/habitats
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::models::Habitat;
use crate::state::AppState;

/// GET /api/habitats
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Habitat>>, ApiError> {
    Ok(Json(state.habitats.get_all().await?))
}

/// GET /api/habitats/with-animals - list with derived animal-id lists
pub async fn list_with_animals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Habitat>>, ApiError> {
    Ok(Json(state.habitats.get_all_with_animals().await?))
}

/// GET /api/habitats/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Habitat>, ApiError> {
    state
        .habitats
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Habitat not found: {id}")))
}

/// POST /api/habitats
pub async fn create(
    State(state): State<AppState>,
    Json(habitat): Json<Habitat>,
) -> Result<Json<Habitat>, ApiError> {
    Ok(Json(state.habitats.create(habitat).await?))
}

/// PUT /api/habitats/:id - full replace, path id wins over any body id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(habitat): Json<Habitat>,
) -> Result<Json<Habitat>, ApiError> {
    Ok(Json(state.habitats.update(&id, habitat).await?))
}

/// DELETE /api/habitats/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.habitats.delete(&id).await?;
    Ok(StatusCode::OK)
}
