//! HTTP API
//!
//! REST calls to the Pulseboard server.

mod client;

pub use client::{fetch_dashboard, get_api_base};
