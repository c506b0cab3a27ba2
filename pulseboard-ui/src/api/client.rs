//! HTTP API Client
//!
//! One-off calls to the Pulseboard REST API. Live updates arrive over the
//! WebSocket; this is only used to paint something before it connects.

use gloo_net::http::Request;

use crate::state::view::DashboardView;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8086/api/v1";

/// Local storage key overriding the API base
const API_URL_KEY: &str = "pulseboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

// ============ API Functions ============

/// Fetch a rendered dashboard at tick 0
pub async fn fetch_dashboard() -> Result<DashboardView, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ErrorResponse>().await {
            Ok(body) => format!("{}: {}", body.error.code, body.error.message),
            Err(_) => format!("Request failed with status {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8086/api/v1/"), "http://localhost:8086/api/v1");
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}
