use serde::{Deserialize, Serialize};

use super::Entity;

/// A caretaker record. `email` is globally unique (enforced by a pre-check
/// in the service layer). `user_id` links the caretaker 1:1 to a user
/// account for authentication. `assigned_animal_ids` is derived on the
/// with-animals read path only, like `Habitat::animal_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caretaker {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub assigned_animal_ids: Option<Vec<String>>,
}

impl Entity for Caretaker {
    const COLLECTION: &'static str = "caretakers";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
