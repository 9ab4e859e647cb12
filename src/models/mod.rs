pub mod animal;
pub mod caretaker;
pub mod habitat;
pub mod user;

pub use animal::Animal;
pub use caretaker::Caretaker;
pub use habitat::Habitat;
pub use user::{Role, User};

use serde::{de::DeserializeOwned, Serialize};

/// A record type persisted in a named collection of the document store.
///
/// Identifiers are opaque strings assigned by the repository at creation;
/// a record deserialized from a request body may not have one yet.
pub trait Entity: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}
