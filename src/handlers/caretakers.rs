// Handlers for /api/caretakers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::models::Caretaker;
use crate::state::AppState;

/// GET /api/caretakers
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Caretaker>>, ApiError> {
    Ok(Json(state.caretakers.get_all().await?))
}

/// GET /api/caretakers/with-animals - list with derived assignment lists
pub async fn list_with_animals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Caretaker>>, ApiError> {
    Ok(Json(state.caretakers.get_all_with_animals().await?))
}

/// GET /api/caretakers/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Caretaker>, ApiError> {
    state
        .caretakers
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Caretaker not found: {id}")))
}

/// POST /api/caretakers - create, guarded by the email uniqueness pre-check
pub async fn create(
    State(state): State<AppState>,
    Json(caretaker): Json<Caretaker>,
) -> Result<Json<Caretaker>, ApiError> {
    Ok(Json(state.caretakers.create(caretaker).await?))
}

/// PUT /api/caretakers/:id - full replace, path id wins over any body id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(caretaker): Json<Caretaker>,
) -> Result<Json<Caretaker>, ApiError> {
    Ok(Json(state.caretakers.update(&id, caretaker).await?))
}

/// DELETE /api/caretakers/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.caretakers.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /api/caretakers/user/:user_id - lookup by linked user account
pub async fn get_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Caretaker>, ApiError> {
    state
        .caretakers
        .get_by_user_id(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No caretaker linked to user: {user_id}")))
}
