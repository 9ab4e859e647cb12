use serde::{Deserialize, Serialize};

use super::Entity;

/// An animal record. `habitat_id` and `caretaker_id` are foreign references
/// by identifier only; nothing validates that the referenced records exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub health_status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub habitat_id: Option<String>,
    #[serde(default)]
    pub caretaker_id: Option<String>,
}

impl Entity for Animal {
    const COLLECTION: &'static str = "animals";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
