//! API models for the provider's droplet REST API
//!
//! This module contains the response envelopes and pagination metadata
//! returned by the `GET /v2/droplets` list endpoint. Only the narrow slice
//! of the upstream contract the CLI needs is modeled: page items, the
//! optional "next page" reference, and the error envelope.

use serde::{Deserialize, Serialize};

use crate::error::{DropletError, Result};
use crate::types::Droplet;

/// Response body of the droplet list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletListResponse {
    /// Droplets on this page, in the order the provider returned them
    pub droplets: Vec<Droplet>,
    /// Pagination links; absent on single-page responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Listing metadata; absent on some responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl DropletListResponse {
    /// Whether this response is the last page of the listing.
    ///
    /// Missing links or pages mean the provider had nothing further to
    /// report, which counts as the last page.
    pub fn is_last_page(&self) -> bool {
        self.links.as_ref().map_or(true, Links::is_last_page)
    }

    /// Page number of this response, derived from the pagination links.
    ///
    /// A response with no links is page 1.
    pub fn current_page(&self) -> Result<u32> {
        self.links
            .as_ref()
            .and_then(|links| links.pages.as_ref())
            .map_or(Ok(1), Pages::current_page)
    }
}

/// Pagination links block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    /// Page references; absent when the listing fits on one page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

impl Links {
    /// Whether there is no further page to fetch.
    pub fn is_last_page(&self) -> bool {
        self.pages.as_ref().map_or(true, |pages| pages.next.is_none())
    }
}

/// Page references within a links block. Each is a full request URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pages {
    /// URL of the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// URL of the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// URL of the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URL of the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl Pages {
    /// Page number of the response these links came from.
    ///
    /// Derived from the `page` query parameter of the `next` link (minus
    /// one) or the `prev` link (plus one). With neither link present the
    /// response is page 1.
    pub fn current_page(&self) -> Result<u32> {
        if let Some(next) = &self.next {
            return Ok(page_param(next)?.saturating_sub(1).max(1));
        }
        if let Some(prev) = &self.prev {
            return Ok(page_param(prev)? + 1);
        }
        Ok(1)
    }
}

/// Listing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of droplets across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Error envelope returned by the provider on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Short machine-readable error identifier
    pub id: String,
    /// Human-readable error message
    pub message: String,
}

/// Extract the `page` query parameter from a pagination link.
fn page_param(url: &str) -> Result<u32> {
    let query = url.split_once('?').map(|(_, query)| query).unwrap_or("");

    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("page=") {
            return value.parse::<u32>().map_err(|_| {
                DropletError::Pagination(format!("invalid page parameter in link: {}", url))
            });
        }
    }

    Err(DropletError::Pagination(format!(
        "no page parameter in link: {}",
        url
    )))
}
