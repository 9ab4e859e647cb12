// Handlers for /api/home
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/home/statistics - collection counts, recomputed on every call
pub async fn statistics(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let total_animals = state.animals.get_all().await?.len();
    let total_habitats = state.habitats.get_all().await?.len();
    let total_caretakers = state.caretakers.get_all().await?.len();

    Ok(Json(json!({
        "totalAnimals": total_animals,
        "totalHabitats": total_habitats,
        "totalCaretakers": total_caretakers,
    })))
}
