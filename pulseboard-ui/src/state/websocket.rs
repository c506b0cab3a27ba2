//! WebSocket Client
//!
//! Live session with the Pulseboard server. The server pushes rendered
//! views; the client sends UI events.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::GlobalState;
use super::view::DashboardView;

/// Reconnect attempts before giving up
const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// Keepalive ping period
const PING_INTERVAL_MS: u32 = 30_000;

/// WebSocket message types from server
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    Connected {
        connection_id: String,
    },
    View {
        view: DashboardView,
    },
    Pong,
    Error {
        message: String,
    },
}

/// WebSocket client message types
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SelectTab { tab: String },
    ToggleSidebar,
    SetTimeRange { range: String },
    Ping,
}

/// WebSocket client for the live session
pub struct WebSocketClient {
    url: String,
    reconnect_attempts: Rc<RefCell<u32>>,
}

impl WebSocketClient {
    /// Create a new WebSocket client
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            reconnect_attempts: Rc::new(RefCell::new(0)),
        }
    }

    /// Connect to the WebSocket server
    pub fn connect(&self, state: GlobalState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws, state.clone());
                *state.socket.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                self.schedule_reconnect(state);
            }
        }
    }

    /// Set up WebSocket event handlers
    fn setup_handlers(&self, ws: &WebSocket, state: GlobalState) {
        // On open
        let state_clone = state.clone();
        let reconnect_clone = Rc::clone(&self.reconnect_attempts);
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"WebSocket connected".into());
            state_clone.ws_connected.set(true);
            state_clone.clear_error();
            *reconnect_clone.borrow_mut() = 0;
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let state_clone = state.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text_str: String = text.into();
                handle_message(&text_str, &state_clone);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close
        let state_clone = state.clone();
        let client = WebSocketClient {
            url: self.url.clone(),
            reconnect_attempts: Rc::clone(&self.reconnect_attempts),
        };
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!("WebSocket closed: code={}, reason={}", event.code(), event.reason()).into(),
            );
            state_clone.ws_connected.set(false);
            state_clone.connection_id.set(None);
            *state_clone.socket.borrow_mut() = None;
            client.schedule_reconnect(state_clone.clone());
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    /// Schedule a reconnect attempt with exponential backoff
    fn schedule_reconnect(&self, state: GlobalState) {
        let attempts = *self.reconnect_attempts.borrow();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            state.show_error("Lost connection to the server");
            return;
        }

        let delay = reconnect_delay_ms(attempts);
        *self.reconnect_attempts.borrow_mut() = attempts + 1;

        let client = WebSocketClient {
            url: self.url.clone(),
            reconnect_attempts: Rc::clone(&self.reconnect_attempts),
        };

        gloo_timers::callback::Timeout::new(delay, move || {
            web_sys::console::log_1(
                &format!("Attempting reconnect (attempt {})", client.reconnect_attempts.borrow()).into(),
            );
            client.connect(state);
        })
        .forget();
    }
}

/// Backoff before reconnect attempt `attempts + 1`
pub fn reconnect_delay_ms(attempts: u32) -> u32 {
    2_u32.saturating_pow(attempts).saturating_mul(1000).min(30_000)
}

/// Handle incoming WebSocket message
fn handle_message(text: &str, state: &GlobalState) {
    match serde_json::from_str::<WsMessage>(text) {
        Ok(WsMessage::Connected { connection_id }) => {
            web_sys::console::log_1(&format!("Connected with ID: {}", connection_id).into());
            state.connection_id.set(Some(connection_id));
        }
        Ok(WsMessage::View { view }) => {
            state.set_view(view);
        }
        Ok(WsMessage::Pong) => {
            // Connection alive
        }
        Ok(WsMessage::Error { message }) => {
            web_sys::console::error_1(&format!("Server error: {}", message).into());
            state.show_error(&message);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse WebSocket message: {}", e).into());
        }
    }
}

/// WebSocket URL for an HTTP API base (which already ends in `/api/v1`)
pub fn websocket_url(api_base: &str) -> String {
    let ws_base = api_base
        .trim_end_matches('/')
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!("{}/ws", ws_base)
}

/// Initialize WebSocket connection (call from app root)
pub fn init_websocket(state: GlobalState, api_base: &str) {
    let client = WebSocketClient::new(&websocket_url(api_base));
    client.connect(state.clone());

    gloo_timers::callback::Interval::new(PING_INTERVAL_MS, move || {
        if state.ws_connected.get_untracked() {
            state.send(ClientMessage::Ping);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_url() {
        assert_eq!(websocket_url("http://localhost:8086/api/v1"), "ws://localhost:8086/api/v1/ws");
        assert_eq!(websocket_url("https://dash.example.com/api/v1/"), "wss://dash.example.com/api/v1/ws");
    }

    #[test]
    fn test_reconnect_backoff() {
        assert_eq!(reconnect_delay_ms(0), 1000);
        assert_eq!(reconnect_delay_ms(3), 8000);
        assert_eq!(reconnect_delay_ms(10), 30_000);
    }

    #[test]
    fn test_client_message_wire_format() {
        let json = serde_json::to_string(&ClientMessage::SetTimeRange { range: "90d".into() }).unwrap();
        assert_eq!(json, r#"{"type":"set_time_range","range":"90d"}"#);

        let json = serde_json::to_string(&ClientMessage::ToggleSidebar).unwrap();
        assert_eq!(json, r#"{"type":"toggle_sidebar"}"#);
    }

    #[test]
    fn test_server_message_parse() {
        let msg: WsMessage = serde_json::from_str(r#"{"type":"connected","connection_id":"abc"}"#).unwrap();
        assert!(matches!(msg, WsMessage::Connected { connection_id } if connection_id == "abc"));

        let msg: WsMessage = serde_json::from_str(r#"{"type":"error","message":"bad"}"#).unwrap();
        assert!(matches!(msg, WsMessage::Error { .. }));
    }
}
