use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{animals, auth, caretakers, habitats, home};
use crate::middleware::{jwt_auth_middleware, require_manager, require_staff};
use crate::state::AppState;

/// Assemble the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(animal_routes())
        .merge(habitat_routes())
        .merge(caretaker_routes())
        .merge(home_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
}

fn animal_routes() -> Router<AppState> {
    let open = Router::new()
        .route("/api/animals", get(animals::list))
        .route("/api/animals/:id", get(animals::get))
        .route("/api/animals/habitat/:habitat_id", get(animals::list_by_habitat))
        .route(
            "/api/animals/caretaker/:caretaker_id",
            get(animals::list_by_caretaker),
        );

    // Layer order: jwt_auth_middleware runs first, then the role guard
    let manager = Router::new()
        .route("/api/animals", post(animals::create))
        .route("/api/animals/:id", put(animals::update).delete(animals::delete))
        .route_layer(from_fn(require_manager))
        .route_layer(from_fn(jwt_auth_middleware));

    open.merge(manager)
}

fn habitat_routes() -> Router<AppState> {
    let open = Router::new()
        .route("/api/habitats", get(habitats::list))
        .route("/api/habitats/with-animals", get(habitats::list_with_animals))
        .route("/api/habitats/:id", get(habitats::get));

    let manager = Router::new()
        .route("/api/habitats", post(habitats::create))
        .route(
            "/api/habitats/:id",
            put(habitats::update).delete(habitats::delete),
        )
        .route_layer(from_fn(require_manager))
        .route_layer(from_fn(jwt_auth_middleware));

    open.merge(manager)
}

fn caretaker_routes() -> Router<AppState> {
    let staff = Router::new()
        .route("/api/caretakers", get(caretakers::list))
        .route(
            "/api/caretakers/with-animals",
            get(caretakers::list_with_animals),
        )
        .route("/api/caretakers/:id", get(caretakers::get))
        .route("/api/caretakers/user/:user_id", get(caretakers::get_by_user))
        .route_layer(from_fn(require_staff))
        .route_layer(from_fn(jwt_auth_middleware));

    let manager = Router::new()
        .route("/api/caretakers", post(caretakers::create))
        .route(
            "/api/caretakers/:id",
            put(caretakers::update).delete(caretakers::delete),
        )
        .route_layer(from_fn(require_manager))
        .route_layer(from_fn(jwt_auth_middleware));

    staff.merge(manager)
}

fn home_routes() -> Router<AppState> {
    Router::new().route("/api/home/statistics", get(home::statistics))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Sanctuary API",
        "version": version,
        "description": "Record-management backend for a wildlife sanctuary",
        "endpoints": {
            "animals": "/api/animals (reads open, writes MANAGER)",
            "habitats": "/api/habitats (reads open, writes MANAGER)",
            "caretakers": "/api/caretakers (reads MANAGER/CARETAKER, writes MANAGER)",
            "auth": "/api/auth/login, /api/auth/register (open)",
            "statistics": "/api/home/statistics (open)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
