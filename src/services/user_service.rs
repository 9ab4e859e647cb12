use std::sync::Arc;

use crate::auth::password;
use crate::models::User;
use crate::repository::Repository;
use crate::store::DocumentStore;

use super::ServiceError;

/// Record access for user accounts.
#[derive(Clone)]
pub struct UserService {
    repo: Repository<User>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Create a user, hashing the plaintext password before persisting.
    /// Email and username uniqueness are checked independently, each
    /// producing its own duplicate-key failure.
    pub async fn create_user(&self, mut user: User) -> Result<User, ServiceError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(ServiceError::Duplicate(
                "A user with this email already exists".to_string(),
            ));
        }
        if self.get_by_username(&user.username).await?.is_some() {
            return Err(ServiceError::Duplicate(
                "A user with this username already exists".to_string(),
            ));
        }

        user.password =
            password::hash_password(&user.password).map_err(|_| ServiceError::PasswordHash)?;
        Ok(self.repo.save(user).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.repo.find_one_where(|u| u.username == username).await?)
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, ServiceError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.repo.find_one_where(|u| u.email == email).await?)
    }

    /// Credential lookup for a login attempt. Unlike the plain lookups,
    /// absence is an error here so the authentication flow has a failure
    /// it can map to a uniform rejection.
    pub async fn load_for_authentication(&self, username: &str) -> Result<User, ServiceError> {
        self.get_by_username(username).await?.ok_or_else(|| {
            ServiceError::NotFound(format!("User not found with username: {username}"))
        })
    }
}
