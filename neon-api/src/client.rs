//! HTTP transport for the control plane

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Production control-plane origin. All resource paths are relative
/// to it.
pub const DEFAULT_BASE_URL: &str = "https://console.neon.tech/api/v2";

/// Every exchange is bounded by this timeout; cancellation beyond it
/// is the caller's concern.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated client for the Neon control plane.
///
/// Each call performs a single request/response exchange. The client
/// holds no mutable state, so it can be cloned freely or rebuilt per
/// operation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Point the client at a different origin. Used by tests to talk
    /// to a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.request(Method::GET, path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let payload = serde_json::to_vec(body)?;
        let body = self.request(Method::POST, path, Some(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let payload = serde_json::to_vec(body)?;
        let body = self.request(Method::PATCH, path, Some(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Success is any 2xx; the 204 body, if any, is discarded.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, api_key = %mask_key(&self.api_key), "control-plane request");

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(payload) = body {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), body = %text, "control-plane response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

/// Keeps only the first and last four characters of the key for
/// diagnostic log lines.
fn mask_key(key: &str) -> String {
    match (key.get(..4), key.get(key.len().saturating_sub(4)..)) {
        (Some(head), Some(tail)) if key.len() > 8 => format!("{head}...{tail}"),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_edges_only() {
        assert_eq!(mask_key("neon_api_key_12345678"), "neon...5678");
    }

    #[test]
    fn test_mask_key_hides_short_keys_entirely() {
        assert_eq!(mask_key("secret"), "***");
        assert_eq!(mask_key(""), "***");
    }

    #[test]
    fn test_base_url_override() {
        let client = ApiClient::new("k").unwrap().with_base_url("http://127.0.0.1:1");
        assert_eq!(client.base_url, "http://127.0.0.1:1");
    }
}
