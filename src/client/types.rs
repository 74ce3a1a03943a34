//! Wire types of the PetFriends API
//!
//! Field names are the external contract and must match the remote service
//! exactly; do not rename them.

use serde::Deserialize;

/// Opaque token proving caller identity
///
/// Obtained from [`get_api_key`](crate::PetFriends::get_api_key) and required
/// by every other operation. The field is public so that invalid-key
/// scenarios can fabricate one.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthKey {
    pub key: String,
}

impl AuthKey {
    /// Build a key from a raw token value
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// A pet as reported by the remote service
///
/// `age` comes back as a string or a number depending on how the pet was
/// created, so it is kept as raw JSON. `pet_photo` is a possibly-empty
/// data string.
#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    #[serde(default)]
    pub age: serde_json::Value,
    #[serde(default)]
    pub pet_photo: String,
}

impl Pet {
    /// Whether the pet has a photo attached
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }
}

/// Response body of the listing operation
#[derive(Debug, Clone, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Whether any pet id in the list equals `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|p| p.id == id)
    }
}

/// Response body of the set-photo operation
#[derive(Debug, Clone, Deserialize)]
pub struct PetPhoto {
    #[serde(default)]
    pub pet_photo: String,
}

/// Scope selector for pet listing
///
/// `Other` values are forwarded unchanged so that the remote's handling of
/// invalid filters stays observable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// All pets known to the service (empty filter parameter)
    All,
    /// Only pets owned by the caller
    MyPets,
    /// Any other value, passed through as-is
    Other(String),
}

impl Filter {
    /// The literal query parameter value sent to the service
    pub fn as_param(&self) -> &str {
        match self {
            Filter::All => "",
            Filter::MyPets => "my_pets",
            Filter::Other(value) => value,
        }
    }
}
