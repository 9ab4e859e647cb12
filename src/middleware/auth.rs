use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::config;
use crate::error::ApiError;
use crate::models::Role;

/// Authenticated caller context extracted from a verified JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts caller
/// context. Rejects the request when no valid bearer token is present;
/// routes without this layer stay open to anonymous callers.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_jwt_from_headers(&headers)
        .map_err(|msg| ApiError::unauthorized(msg).into_response())?;

    let claims =
        validate_jwt(&token).map_err(|msg| ApiError::unauthorized(msg).into_response())?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Explicit authorization gate: allow when the caller's role claim is in
/// `allowed`, deny with a 403 otherwise.
pub fn authorize(allowed: &[Role], user: &AuthUser) -> Result<(), ApiError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::forbidden(format!(
            "Role {} is not permitted to perform this operation",
            user.role
        )))
    }
}

/// Guard for manager-only routes; layered after `jwt_auth_middleware`.
pub async fn require_manager(request: Request, next: Next) -> Result<Response, Response> {
    require_roles(&[Role::Manager], request, next).await
}

/// Guard for routes open to sanctuary staff (managers and caretakers).
pub async fn require_staff(request: Request, next: Next) -> Result<Response, Response> {
    require_roles(&[Role::Manager, Role::Caretaker], request, next).await
}

async fn require_roles(
    allowed: &[Role],
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(user) = request.extensions().get::<AuthUser>() else {
        // Only reachable when the guard is layered without jwt_auth_middleware
        return Err(
            ApiError::unauthorized("Missing authentication context".to_string()).into_response(),
        );
    };

    authorize(allowed, user).map_err(IntoResponse::into_response)?;
    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Validate JWT token and extract claims
fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid JWT token: {}", e))?;

    Ok(token_data.claims)
}
