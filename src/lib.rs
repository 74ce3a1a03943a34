//! PetFriends API test client
//!
//! A typed client for the PetFriends pet-management HTTP API, built for
//! end-to-end contract testing. Every operation performs exactly one HTTP
//! round trip and returns the raw status code together with the decoded
//! body, so test scenarios can assert on the remote service's actual
//! behavior without any local validation getting in the way.

pub mod client;
pub mod common;

// Re-export commonly used types for tests
pub use client::{ApiResponse, AuthKey, Filter, Pet, PetFriends, PetList, PetPhoto, ResponseBody};
pub use common::{Error, Result, Settings};
