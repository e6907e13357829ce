//! HTTP client for the provider's droplet API.

use std::time::Duration;

use droplet_core::api::{ApiErrorBody, DropletListResponse};
use droplet_core::{Credential, Droplet, DropletError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Base URL of the production API.
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client for the provider's droplet REST API.
///
/// The client attaches the bearer credential to every outgoing request and
/// exposes the paginated list endpoint as a single call that accumulates
/// all pages. Requests are issued strictly one at a time; correctness of
/// the accumulated order depends on that sequencing. A failure on any page
/// aborts the whole listing and discards results from prior pages.
///
/// Construction performs no network activity.
///
/// # Examples
///
/// ```no_run
/// use droplet_core::Credential;
/// use dropletctl::client::DropletClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let credential = Credential::new("dop_v1_example");
/// let client = DropletClient::new(&credential)?;
///
/// let droplets = client.list_all_droplets().await?;
/// println!("{} droplets", droplets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DropletClient {
    client: Client,
    base_url: String,
}

impl DropletClient {
    /// Create a client for the production API with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credential: &Credential) -> Result<Self> {
        Self::with_config(DEFAULT_API_URL, credential, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom base URL and timeout.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Base URL of the API (e.g. "https://api.digitalocean.com")
    /// * `credential` - Bearer token attached to every request
    /// * `timeout_secs` - Request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credential cannot be encoded
    /// into an `Authorization` header or the HTTP client cannot be created.
    pub fn with_config(
        api_url: &str,
        credential: &Credential,
        timeout_secs: u64,
    ) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credential.as_str()))
            .map_err(|_| {
                DropletError::Config(
                    "credential contains characters not allowed in an Authorization header"
                        .to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("dropletctl/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| DropletError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_url(api_url),
        })
    }

    /// Process an HTTP response and decode the API data.
    ///
    /// Non-success statuses are mapped to upstream errors, preferring the
    /// provider's error envelope message over the raw body text.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if:
    /// - The HTTP status code indicates failure (4xx or 5xx)
    /// - The response body cannot be read
    /// - The JSON cannot be deserialized
    async fn handle_response<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DropletError::Upstream(format!(
                "failed to read response body from {}: {}",
                endpoint, e
            ))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            let error_msg = match status {
                StatusCode::UNAUTHORIZED => {
                    format!("authentication rejected at {}: {}", endpoint, detail)
                }
                StatusCode::FORBIDDEN => format!("access forbidden to {}: {}", endpoint, detail),
                StatusCode::NOT_FOUND => format!("endpoint {} not found", endpoint),
                StatusCode::TOO_MANY_REQUESTS => {
                    format!("rate limited at {}: {}", endpoint, detail)
                }
                StatusCode::INTERNAL_SERVER_ERROR => {
                    format!("server error at {}: {}", endpoint, detail)
                }
                _ => format!("HTTP {} error at {}: {}", status, endpoint, detail),
            };
            return Err(DropletError::Upstream(error_msg));
        }

        serde_json::from_str(&text).map_err(|e| {
            DropletError::Upstream(format!(
                "failed to parse JSON response from {}: {}",
                endpoint, e
            ))
        })
    }

    /// Fetch a single page of the droplet listing.
    ///
    /// Page 1 is requested without a page parameter and no page-size
    /// override; later pages carry an explicit `page` query.
    async fn fetch_page(&self, page: u32) -> Result<DropletListResponse> {
        let url = if page <= 1 {
            format!("{}/v2/droplets", self.base_url)
        } else {
            format!("{}/v2/droplets?page={}", self.base_url, page)
        };
        let endpoint = "droplets";

        let response = self.client.get(&url).send().await.map_err(|e| {
            DropletError::Upstream(format!("request to {} failed: {}", endpoint, e))
        })?;

        Self::handle_response(response, endpoint).await
    }

    /// Retrieve every droplet in the account, across all pages.
    ///
    /// Pages are fetched in sequence, following the provider's "next page"
    /// links until none remains, and concatenated in the order received.
    /// No retries: a failure on any page aborts the listing. Duplicates in
    /// overlapping pages, should the provider ever return them, propagate
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if any page request fails, or a
    /// pagination error if a "next page" link cannot be interpreted.
    pub async fn list_all_droplets(&self) -> Result<Vec<Droplet>> {
        let mut droplets = Vec::new();
        let mut page = 1;

        loop {
            let response = self.fetch_page(page).await?;
            let last = response.is_last_page();
            let current = if last { page } else { response.current_page()? };
            droplets.extend(response.droplets);

            if last {
                break;
            }
            page = current + 1;
        }

        Ok(droplets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_droplets, MockDropletApi};
    use axum::http::StatusCode as MockStatusCode;

    fn test_credential() -> Credential {
        Credential::new("dop_v1_test_token")
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("https://api.digitalocean.com"),
            "https://api.digitalocean.com"
        );
        assert_eq!(
            normalize_url("https://api.digitalocean.com/"),
            "https://api.digitalocean.com"
        );
        assert_eq!(
            normalize_url("http://localhost:3000///"),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_pagination_accumulates_all_pages_in_order() {
        let mock = MockDropletApi::new(sample_droplets(6), 2);
        let (mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        let droplets = client.list_all_droplets().await.unwrap();

        assert_eq!(droplets.len(), 6);
        let ids: Vec<u64> = droplets.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn test_single_page_issues_exactly_one_request() {
        let mock = MockDropletApi::new(sample_droplets(3), 20);
        let (mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        let droplets = client.list_all_droplets().await.unwrap();

        assert_eq!(droplets.len(), 3);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_listing_returns_empty_vec() {
        let mock = MockDropletApi::new(Vec::new(), 20);
        let (_mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        let droplets = client.list_all_droplets().await.unwrap();

        assert!(droplets.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_aborts_listing() {
        let mock = MockDropletApi::new(sample_droplets(4), 2);
        mock.fail_with(
            MockStatusCode::INTERNAL_SERVER_ERROR,
            "server_error",
            "something went wrong",
        );
        let (_mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        let result = client.list_all_droplets().await;

        match result {
            Err(DropletError::Upstream(msg)) => {
                assert!(msg.contains("something went wrong"));
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_is_reported_as_upstream_error() {
        let mock = MockDropletApi::new(sample_droplets(1), 20);
        mock.fail_with(
            MockStatusCode::UNAUTHORIZED,
            "unauthorized",
            "Unable to authenticate you",
        );
        let (_mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        let result = client.list_all_droplets().await;

        match result {
            Err(DropletError::Upstream(msg)) => {
                assert!(msg.contains("authentication rejected"));
                assert!(msg.contains("Unable to authenticate you"));
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_requests_carry_bearer_authorization() {
        let mock = MockDropletApi::new(sample_droplets(1), 20);
        let (mock, url) = mock.start().await.unwrap();

        let client = DropletClient::with_config(&url, &test_credential(), 5).unwrap();
        client.list_all_droplets().await.unwrap();

        assert_eq!(
            mock.last_authorization().as_deref(),
            Some("Bearer dop_v1_test_token")
        );
    }
}
