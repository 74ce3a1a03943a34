//! Uniform response decoding
//!
//! Every client operation resolves to an [`ApiResponse`]: the HTTP status
//! plus either the decoded body or the raw text when the body is not the
//! expected JSON shape (typical for remote error responses). Decoding is
//! attempted regardless of status, because the service sometimes returns
//! structured bodies on error statuses too.

use serde::de::DeserializeOwned;

use crate::common::Result;

/// Status code and decoded body of one round trip
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code as reported by the service
    pub status: u16,
    /// Decoded body, or the raw text when it did not match `T`
    pub body: ResponseBody<T>,
}

/// Body of a response: the expected shape, or whatever text came back
#[derive(Debug, Clone)]
pub enum ResponseBody<T> {
    Parsed(T),
    Raw(String),
}

impl<T> ApiResponse<T> {
    /// Whether the status is 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// The decoded body, if it matched the expected shape
    pub fn parsed(&self) -> Option<&T> {
        match &self.body {
            ResponseBody::Parsed(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// The raw body text, if decoding did not match
    pub fn raw(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Parsed(_) => None,
            ResponseBody::Raw(text) => Some(text),
        }
    }

    /// The decoded body, panicking with context otherwise
    ///
    /// Intended for scenario assertions where a missing field is itself the
    /// test failure.
    pub fn expect_parsed(&self, operation: &str) -> &T {
        match &self.body {
            ResponseBody::Parsed(value) => value,
            ResponseBody::Raw(text) => panic!(
                "{operation}: status {} body did not match the expected shape: {text}",
                self.status
            ),
        }
    }
}

/// Decode a reqwest response into an [`ApiResponse`]
pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>> {
    let status = response.status().as_u16();
    let text = response.text().await?;

    let body = match serde_json::from_str::<T>(&text) {
        Ok(value) => ResponseBody::Parsed(value),
        Err(_) => ResponseBody::Raw(text),
    };

    Ok(ApiResponse { status, body })
}
