use std::sync::Arc;

use crate::services::{AnimalService, CaretakerService, HabitatService, UserService};
use crate::store::DocumentStore;

/// Shared request context: the service layer wired over one injected
/// document store. Cloned per request by axum; the services share the
/// store handle underneath.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub animals: AnimalService,
    pub habitats: HabitatService,
    pub caretakers: CaretakerService,
    pub users: UserService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let animals = AnimalService::new(store.clone());
        let habitats = HabitatService::new(store.clone(), animals.clone());
        let caretakers = CaretakerService::new(store.clone(), animals.clone());
        let users = UserService::new(store.clone());

        Self {
            store,
            animals,
            habitats,
            caretakers,
            users,
        }
    }
}
