use serde::{Deserialize, Serialize};

use super::Entity;

/// A habitat record.
///
/// `animal_ids` is a derived field: it is only populated on the
/// with-animals read path, by scanning the animal collection for records
/// whose `habitat_id` matches. Plain get/list return whatever the stored
/// document holds, normally null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitat {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub habitat_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub animal_ids: Option<Vec<String>>,
}

impl Entity for Habitat {
    const COLLECTION: &'static str = "habitats";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
