use std::sync::Arc;

use crate::models::Caretaker;
use crate::repository::Repository;
use crate::store::DocumentStore;

use super::{AnimalService, ServiceError};

/// Record access for caretakers, with an email-uniqueness guard on every
/// write. The guard is a pre-check against the collection, not a store
/// index, so concurrent creates can race past it.
#[derive(Clone)]
pub struct CaretakerService {
    repo: Repository<Caretaker>,
    animals: AnimalService,
}

impl CaretakerService {
    pub fn new(store: Arc<dyn DocumentStore>, animals: AnimalService) -> Self {
        Self {
            repo: Repository::new(store),
            animals,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Caretaker>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Caretaker>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn create(&self, caretaker: Caretaker) -> Result<Caretaker, ServiceError> {
        if self.find_by_email(&caretaker.email).await?.is_some() {
            return Err(ServiceError::Duplicate(
                "A caretaker with this email already exists".to_string(),
            ));
        }
        Ok(self.repo.save(caretaker).await?)
    }

    /// Full-record replace; the email guard tolerates the record keeping
    /// its own email.
    pub async fn update(
        &self,
        id: &str,
        mut caretaker: Caretaker,
    ) -> Result<Caretaker, ServiceError> {
        if let Some(existing) = self.find_by_email(&caretaker.email).await? {
            if existing.id.as_deref() != Some(id) {
                return Err(ServiceError::Duplicate(
                    "A caretaker with this email already exists".to_string(),
                ));
            }
        }
        caretaker.id = Some(id.to_string());
        Ok(self.repo.save(caretaker).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    /// Single-valued lookup by the linked user account.
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Caretaker>, ServiceError> {
        Ok(self
            .repo
            .find_one_where(|c| c.user_id.as_deref() == Some(user_id))
            .await?)
    }

    /// Fetch every caretaker, then overwrite each one's
    /// `assigned_animal_ids` by scanning the animal collection.
    pub async fn get_all_with_animals(&self) -> Result<Vec<Caretaker>, ServiceError> {
        let mut caretakers = self.repo.find_all().await?;
        for caretaker in &mut caretakers {
            if let Some(id) = caretaker.id.clone() {
                let animal_ids = self
                    .animals
                    .get_by_caretaker(&id)
                    .await?
                    .into_iter()
                    .filter_map(|animal| animal.id)
                    .collect();
                caretaker.assigned_animal_ids = Some(animal_ids);
            }
        }
        Ok(caretakers)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Caretaker>, ServiceError> {
        Ok(self.repo.find_one_where(|c| c.email == email).await?)
    }
}
