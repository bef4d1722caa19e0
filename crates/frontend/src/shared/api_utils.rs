//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every list endpoint goes through [`fetch_list`], which accepts both a
//! bare JSON array and an `{ "items": [...] }` envelope.

use contracts::shared::list_response::ListResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::system::auth::storage;

/// Port of the REST backend on the same host as the page.
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`BACKEND_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value for the stored access token.
pub fn auth_header() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// GET a list endpoint and normalize its body to `Vec<T>`.
pub async fn fetch_list<T>(path: &str) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    let auth_header = auth_header()?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request to {} failed: {}", path, response.status()));
    }

    response
        .json::<ListResponse<T>>()
        .await
        .map(ListResponse::into_items)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a single JSON document.
pub async fn fetch_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let auth_header = auth_header()?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request to {} failed: {}", path, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
