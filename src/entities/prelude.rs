pub use super::adoption_request::Entity as AdoptionRequest;
pub use super::pet::Entity as Pet;
pub use super::user::Entity as User;
