// Handlers for /api/auth
use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, password, Claims};
use crate::error::ApiError;
use crate::models::User;
use crate::services::ServiceError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login - verify credentials and issue a signed token.
///
/// Rejections are uniform across unknown-username and wrong-password so
/// callers cannot probe which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = match state.users.load_for_authentication(&payload.username).await {
        Ok(user) => user,
        Err(ServiceError::NotFound(_)) => return Err(invalid_credentials()),
        Err(err) => return Err(err.into()),
    };

    if password::verify_password(&payload.password, &user.password).is_err() {
        return Err(invalid_credentials());
    }

    let user_id = user.id.clone().unwrap_or_default();
    let token = auth::generate_jwt(Claims::new(
        user_id.clone(),
        user.username.clone(),
        user.role,
    ))?;

    Ok(Json(json!({
        "token": token,
        "id": user_id,
        "username": user.username,
        "role": user.role,
    })))
}

/// POST /api/auth/register - open registration.
///
/// The role is persisted exactly as supplied in the body, so any caller
/// can self-assign MANAGER; see DESIGN.md before exposing this anywhere
/// that matters.
pub async fn register(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<Value>, ApiError> {
    if state.users.exists_by_username(&user.username).await? {
        return Err(ApiError::bad_request("Username is already taken"));
    }

    let user = state.users.create_user(user).await?;
    tracing::info!("Registered user {}", user.username);

    Ok(Json(json!({
        "id": user.id,
        "username": user.username,
        "role": user.role,
    })))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid username or password")
}
