//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod health;

use super::error::ApiError;
use axum::http::Uri;

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
