pub mod animal_service;
pub mod caretaker_service;
pub mod habitat_service;
pub mod user_service;

pub use animal_service::AnimalService;
pub use caretaker_service::CaretakerService;
pub use habitat_service::HabitatService;
pub use user_service::UserService;

use thiserror::Error;

use crate::store::StoreError;

/// Errors from the record-access layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A uniqueness pre-check found a colliding record.
    #[error("{0}")]
    Duplicate(String),

    /// A lookup that requires a record found none.
    #[error("{0}")]
    NotFound(String),

    #[error("Password hashing failed")]
    PasswordHash,

    #[error(transparent)]
    Store(#[from] StoreError),
}
