//! Test utilities for CLI testing
//!
//! Provides a mock droplet API server and droplet fixtures for testing the
//! client against realistic paginated responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use droplet_core::api::{ApiErrorBody, DropletListResponse, Links, Meta, Pages};
use droplet_core::{
    Droplet, NetworkInterface, Networks, NETWORK_TYPE_PRIVATE, NETWORK_TYPE_PUBLIC,
};
use serde::Deserialize;
use tokio::net::TcpListener;

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockApiState {
    /// Fixture droplets served across pages
    pub droplets: Arc<Mutex<Vec<Droplet>>>,
    /// Droplets per page
    pub page_size: usize,
    /// Base URL used when building pagination links
    pub base_url: Arc<Mutex<String>>,
    /// Number of list requests served
    pub requests: Arc<AtomicUsize>,
    /// Forced failure response, if any
    pub failure: Arc<Mutex<Option<(StatusCode, ApiErrorBody)>>>,
    /// Authorization header of the most recent request
    pub last_authorization: Arc<Mutex<Option<String>>>,
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<u32>,
}

/// Mock droplet API server
#[derive(Debug)]
pub struct MockDropletApi {
    state: MockApiState,
    port: u16,
}

impl MockDropletApi {
    /// Create a mock API serving the given droplets, `page_size` per page.
    pub fn new(droplets: Vec<Droplet>, page_size: usize) -> Self {
        let state = MockApiState {
            droplets: Arc::new(Mutex::new(droplets)),
            page_size: page_size.max(1),
            base_url: Arc::new(Mutex::new(String::new())),
            requests: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(Mutex::new(None)),
            last_authorization: Arc::new(Mutex::new(None)),
        };

        Self { state, port: 0 }
    }

    /// Make every subsequent list request fail with the given status and
    /// provider-shaped error body.
    pub fn fail_with(&self, status: StatusCode, id: &str, message: &str) {
        *self.state.failure.lock().unwrap() = Some((
            status,
            ApiErrorBody {
                id: id.to_string(),
                message: message.to_string(),
            },
        ));
    }

    /// Start the mock server and return the base URL to point a client at.
    pub async fn start(mut self) -> Result<(Self, String)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);
        *self.state.base_url.lock().unwrap() = server_url.clone();

        let app = self.create_router();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
        }

        Ok((self, server_url))
    }

    /// Get the server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Number of list requests the server has answered
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Authorization header sent with the most recent request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }

    /// Create the mock server router
    fn create_router(&self) -> Router {
        Router::new()
            .route("/v2/droplets", get(list_droplets_handler))
            .with_state(self.state.clone())
    }
}

async fn list_droplets_handler(
    State(state): State<MockApiState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Json<DropletListResponse>, (StatusCode, Json<ApiErrorBody>)> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    *state.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Some((status, body)) = state.failure.lock().unwrap().clone() {
        return Err((status, Json(body)));
    }

    let droplets = state.droplets.lock().unwrap().clone();
    let page = query.page.unwrap_or(1).max(1) as usize;
    let page_size = state.page_size;
    let total_pages = droplets.len().div_ceil(page_size).max(1);

    let page_droplets: Vec<Droplet> = droplets
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    let base_url = state.base_url.lock().unwrap().clone();
    let page_url = |p: usize| format!("{}/v2/droplets?page={}", base_url, p);

    // The real API omits the pages block entirely on single-page listings.
    let links = if total_pages > 1 {
        Some(Links {
            pages: Some(Pages {
                first: Some(page_url(1)),
                prev: (page > 1).then(|| page_url(page - 1)),
                next: (page < total_pages).then(|| page_url(page + 1)),
                last: Some(page_url(total_pages)),
            }),
        })
    } else {
        None
    };

    Ok(Json(DropletListResponse {
        droplets: page_droplets,
        links,
        meta: Some(Meta {
            total: Some(droplets.len() as u64),
        }),
    }))
}

/// Build `count` fixture droplets with ascending ids and one public plus
/// one private IPv4 interface each.
pub fn sample_droplets(count: usize) -> Vec<Droplet> {
    (1..=count as u64)
        .map(|id| Droplet {
            id,
            name: format!("web-{:02}", id),
            created_at: format!("2020-07-{:02}T18:37:44Z", id.min(28)),
            status: "active".to_string(),
            networks: Networks {
                v4: vec![
                    NetworkInterface {
                        kind: NETWORK_TYPE_PUBLIC.to_string(),
                        address: format!("203.0.113.{}", id),
                    },
                    NetworkInterface {
                        kind: NETWORK_TYPE_PRIVATE.to_string(),
                        address: format!("10.0.0.{}", id),
                    },
                ],
            },
        })
        .collect()
}
