//! State Management
//!
//! Global application state, the server's view model and the WebSocket
//! connection.

pub mod global;
pub mod view;
pub mod websocket;
