// Handlers for /api/animals
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::models::Animal;
use crate::state::AppState;

/// GET /api/animals
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Animal>>, ApiError> {
    Ok(Json(state.animals.get_all().await?))
}

/// GET /api/animals/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ApiError> {
    state
        .animals
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Animal not found: {id}")))
}

/// POST /api/animals
pub async fn create(
    State(state): State<AppState>,
    Json(animal): Json<Animal>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(state.animals.create(animal).await?))
}

/// PUT /api/animals/:id - full replace, path id wins over any body id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(animal): Json<Animal>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(state.animals.update(&id, animal).await?))
}

/// DELETE /api/animals/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.animals.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /api/animals/habitat/:habitat_id
pub async fn list_by_habitat(
    State(state): State<AppState>,
    Path(habitat_id): Path<String>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    Ok(Json(state.animals.get_by_habitat(&habitat_id).await?))
}

/// GET /api/animals/caretaker/:caretaker_id
pub async fn list_by_caretaker(
    State(state): State<AppState>,
    Path(caretaker_id): Path<String>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    Ok(Json(state.animals.get_by_caretaker(&caretaker_id).await?))
}
