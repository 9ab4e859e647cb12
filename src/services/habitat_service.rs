use std::sync::Arc;

use crate::models::Habitat;
use crate::repository::Repository;
use crate::store::DocumentStore;

use super::{AnimalService, ServiceError};

/// Record access for habitats.
#[derive(Clone)]
pub struct HabitatService {
    repo: Repository<Habitat>,
    animals: AnimalService,
}

impl HabitatService {
    pub fn new(store: Arc<dyn DocumentStore>, animals: AnimalService) -> Self {
        Self {
            repo: Repository::new(store),
            animals,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Habitat>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Habitat>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn create(&self, habitat: Habitat) -> Result<Habitat, ServiceError> {
        Ok(self.repo.save(habitat).await?)
    }

    /// Full-record replace; the path identifier wins over any id in the body.
    pub async fn update(&self, id: &str, mut habitat: Habitat) -> Result<Habitat, ServiceError> {
        habitat.id = Some(id.to_string());
        Ok(self.repo.save(habitat).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    /// Fetch every habitat, then overwrite each one's `animal_ids` with the
    /// identifiers of the animals currently referencing it. One scan of the
    /// animal collection per habitat; fine at sanctuary scale.
    pub async fn get_all_with_animals(&self) -> Result<Vec<Habitat>, ServiceError> {
        let mut habitats = self.repo.find_all().await?;
        for habitat in &mut habitats {
            if let Some(id) = habitat.id.clone() {
                let animal_ids = self
                    .animals
                    .get_by_habitat(&id)
                    .await?
                    .into_iter()
                    .filter_map(|animal| animal.id)
                    .collect();
                habitat.animal_ids = Some(animal_ids);
            }
        }
        Ok(habitats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Animal;
    use crate::store::MemoryStore;

    fn services() -> (HabitatService, AnimalService) {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let animals = AnimalService::new(store.clone());
        (HabitatService::new(store, animals.clone()), animals)
    }

    fn habitat(name: &str) -> Habitat {
        Habitat {
            id: None,
            name: name.to_string(),
            habitat_type: None,
            description: None,
            area: 0.0,
            climate: None,
            animal_ids: None,
        }
    }

    fn animal_in(name: &str, habitat_id: &str) -> Animal {
        Animal {
            id: None,
            name: name.to_string(),
            species: None,
            date_of_birth: None,
            health_status: None,
            description: None,
            habitat_id: Some(habitat_id.to_string()),
            caretaker_id: None,
        }
    }

    #[tokio::test]
    async fn with_animals_derives_ids_from_references() {
        let (habitats, animals) = services();

        let savanna = habitats.create(habitat("Savanna")).await.unwrap();
        let savanna_id = savanna.id.clone().unwrap();
        let leo = animals.create(animal_in("Leo", &savanna_id)).await.unwrap();
        animals.create(animal_in("Nemo", "elsewhere")).await.unwrap();

        let listed = habitats.get_all_with_animals().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].animal_ids, Some(vec![leo.id.unwrap()]));
    }

    #[tokio::test]
    async fn plain_reads_leave_animal_ids_untouched() {
        let (habitats, animals) = services();

        let savanna = habitats.create(habitat("Savanna")).await.unwrap();
        let savanna_id = savanna.id.clone().unwrap();
        animals.create(animal_in("Leo", &savanna_id)).await.unwrap();

        let fetched = habitats.get_by_id(&savanna_id).await.unwrap().unwrap();
        assert_eq!(fetched.animal_ids, None);
    }
}
