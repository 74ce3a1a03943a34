//! HTTP client for the PetFriends API
//!
//! One method per domain operation, each performing exactly one round trip.
//! There is no retry, caching, or timeout layer and no local input
//! validation: invalid credentials, filters, formats, and ids are forwarded
//! as-is so the remote service's actual behavior is what gets tested.

pub mod response;
pub mod types;

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::common::{Error, Result};

pub use response::{ApiResponse, ResponseBody};
pub use types::{AuthKey, Filter, Pet, PetList, PetPhoto};

/// Client for the PetFriends pet-management API
///
/// Construct once per test process and pass into each scenario. Holds no
/// state besides the transport and base URL; authentication travels
/// per-call via [`AuthKey`].
pub struct PetFriends {
    http: reqwest::Client,
    base_url: String,
}

impl PetFriends {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client against the public PetFriends service
    pub fn public() -> Self {
        Self::new(crate::common::config::DEFAULT_BASE_URL)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Authenticate and obtain an API key
    ///
    /// Email and password are opaque strings; no local validation is
    /// performed. Invalid values surface as a 403 response.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse<AuthKey>> {
        let response = self
            .http
            .post(self.url("api/key"))
            .header("email", email)
            .header("password", password)
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, "get_api_key");
        Ok(decoded)
    }

    /// List pets, scoped by `filter`
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: &Filter,
    ) -> Result<ApiResponse<PetList>> {
        let response = self
            .http
            .get(self.url("api/pets"))
            .header("auth_key", &auth_key.key)
            .query(&[("filter", filter.as_param())])
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, filter = filter.as_param(), "get_list_of_pets");
        Ok(decoded)
    }

    /// Create a pet with a mandatory photo (multipart upload)
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        pet_photo: &Path,
    ) -> Result<ApiResponse<Pet>> {
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo_part(pet_photo)?);

        let response = self
            .http
            .post(self.url("api/pets"))
            .header("auth_key", &auth_key.key)
            .multipart(form)
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, name, "add_new_pet");
        Ok(decoded)
    }

    /// Create a pet without a photo
    ///
    /// `age` may be omitted entirely, which exercises the remote's handling
    /// of a missing required field.
    pub async fn create_pet_simple(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: Option<&str>,
    ) -> Result<ApiResponse<Pet>> {
        let mut fields = vec![("name", name), ("animal_type", animal_type)];
        if let Some(age) = age {
            fields.push(("age", age));
        }

        let response = self
            .http
            .post(self.url("api/create_pet_simple"))
            .header("auth_key", &auth_key.key)
            .form(&fields)
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, name, "create_pet_simple");
        Ok(decoded)
    }

    /// Attach or replace the photo of an owned pet
    ///
    /// Ownership and format validation happen remotely; an unsupported
    /// format surfaces as an error-status response.
    pub async fn add_pet_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet_photo: &Path,
    ) -> Result<ApiResponse<PetPhoto>> {
        let form = Form::new().part("pet_photo", photo_part(pet_photo)?);

        let response = self
            .http
            .post(self.url(&format!("api/pets/set_photo/{pet_id}")))
            .header("auth_key", &auth_key.key)
            .multipart(form)
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, pet_id, "add_pet_photo");
        Ok(decoded)
    }

    /// Overwrite the name, type, and age of an owned pet
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse<Pet>> {
        let response = self
            .http
            .put(self.url(&format!("api/pets/{pet_id}")))
            .header("auth_key", &auth_key.key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, pet_id, "update_pet_info");
        Ok(decoded)
    }

    /// Delete an owned pet
    ///
    /// Not idempotent: deleting an unknown id surfaces the remote error.
    pub async fn delete_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let response = self
            .http
            .delete(self.url(&format!("api/pets/{pet_id}")))
            .header("auth_key", &auth_key.key)
            .send()
            .await?;

        let decoded = response::decode(response).await?;
        debug!(status = decoded.status, pet_id, "delete_pet");
        Ok(decoded)
    }
}

/// Build the multipart file part for a photo
///
/// The photo is an opaque binary input; only the MIME type is inferred,
/// from the file extension.
fn photo_part(path: &Path) -> Result<Part> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, &e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pet_photo".to_string());

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))?;
    Ok(part)
}

/// MIME type for a photo path, by extension
fn photo_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
