//! Global Application State
//!
//! Reactive state management using Leptos signals. The current view is
//! replaced wholesale whenever the server pushes a new one.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::WebSocket;

use super::view::DashboardView;
use super::websocket::ClientMessage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest view pushed by the server
    pub view: RwSignal<Option<DashboardView>>,
    /// WebSocket connection status
    pub ws_connected: RwSignal<bool>,
    /// Server-assigned connection id
    pub connection_id: RwSignal<Option<String>>,
    /// When the last view arrived (ms since epoch)
    pub last_update: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Open socket, if any
    pub socket: Rc<RefCell<Option<WebSocket>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        view: create_rw_signal(None),
        ws_connected: create_rw_signal(false),
        connection_id: create_rw_signal(None),
        last_update: create_rw_signal(None),
        error: create_rw_signal(None),
        socket: Rc::new(RefCell::new(None)),
    };

    provide_context(state);
}

impl GlobalState {
    /// Replace the current view
    pub fn set_view(&self, view: DashboardView) {
        self.view.set(Some(view));
        self.last_update.set(Some(chrono::Utc::now().timestamp_millis()));
    }

    pub fn select_tab(&self, tab: &str) {
        self.send(ClientMessage::SelectTab { tab: tab.to_string() });
    }

    pub fn toggle_sidebar(&self) {
        self.send(ClientMessage::ToggleSidebar);
    }

    pub fn set_time_range(&self, range: &str) {
        self.send(ClientMessage::SetTimeRange { range: range.to_string() });
    }

    /// Send a message over the open socket, surfacing failures as errors
    pub fn send(&self, message: ClientMessage) {
        let result = match self.socket.borrow().as_ref() {
            Some(ws) if ws.ready_state() == WebSocket::OPEN => serde_json::to_string(&message)
                .map_err(|e| e.to_string())
                .and_then(|json| ws.send_with_str(&json).map_err(|e| format!("{:?}", e))),
            _ => Err("Not connected to the server".to_string()),
        };

        if let Err(e) = result {
            web_sys::console::error_1(&format!("Failed to send {:?}: {}", message, e).into());
            self.show_error(&e);
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
