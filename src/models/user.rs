use serde::{Deserialize, Serialize};

use super::Entity;

/// Permission level carried in role claims and on user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "MANAGER")]
    Manager,
    #[serde(rename = "CARETAKER")]
    Caretaker,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::Manager => "MANAGER",
            Role::Caretaker => "CARETAKER",
        })
    }
}

/// A user account. `username` and `email` are each globally unique.
/// `password` holds the argon2 hash once the record has been through
/// `UserService::create_user`; it is never returned by any handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
