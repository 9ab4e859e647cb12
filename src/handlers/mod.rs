pub mod animals;
pub mod auth;
pub mod caretakers;
pub mod habitats;
pub mod home;
