pub mod auth;

pub use auth::{authorize, jwt_auth_middleware, require_manager, require_staff, AuthUser};
