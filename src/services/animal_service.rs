use std::sync::Arc;

use crate::models::Animal;
use crate::repository::Repository;
use crate::store::DocumentStore;

use super::ServiceError;

/// Record access for animals.
///
/// Create and update never validate that the referenced habitat or
/// caretaker identifiers exist; an animal may point at records that were
/// deleted or never created.
#[derive(Clone)]
pub struct AnimalService {
    repo: Repository<Animal>,
}

impl AnimalService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Animal>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Absence is not an error at this layer; callers decide whether a
    /// missing id is a 404.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Animal>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn create(&self, animal: Animal) -> Result<Animal, ServiceError> {
        Ok(self.repo.save(animal).await?)
    }

    /// Full-record replace. The path identifier wins over any id in the
    /// body, and an unknown id creates a record under that id.
    pub async fn update(&self, id: &str, mut animal: Animal) -> Result<Animal, ServiceError> {
        animal.id = Some(id.to_string());
        Ok(self.repo.save(animal).await?)
    }

    /// No existence check: deleting an unknown id is a quiet no-op.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn get_by_habitat(&self, habitat_id: &str) -> Result<Vec<Animal>, ServiceError> {
        Ok(self
            .repo
            .find_where(|a| a.habitat_id.as_deref() == Some(habitat_id))
            .await?)
    }

    pub async fn get_by_caretaker(&self, caretaker_id: &str) -> Result<Vec<Animal>, ServiceError> {
        Ok(self
            .repo
            .find_where(|a| a.caretaker_id.as_deref() == Some(caretaker_id))
            .await?)
    }
}
