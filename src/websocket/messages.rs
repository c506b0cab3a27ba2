//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! dashboards and the Pulseboard server.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ActiveTab, DashboardView, TimeRange, UiEvent};

/// Messages sent from client to server
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Sidebar navigation click
    SelectTab { tab: ActiveTab },
    /// Sidebar open/close button
    ToggleSidebar,
    /// Header time range selector
    SetTimeRange { range: TimeRange },
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// The UI event this message carries, if any
    pub fn ui_event(&self) -> Option<UiEvent> {
        match self {
            ClientMessage::SelectTab { tab } => Some(UiEvent::SelectTab(*tab)),
            ClientMessage::ToggleSidebar => Some(UiEvent::ToggleSidebar),
            ClientMessage::SetTimeRange { range } => Some(UiEvent::SetTimeRange(*range)),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Freshly rendered dashboard
    View { view: Box<DashboardView> },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    pub fn view(view: DashboardView) -> Self {
        ServerMessage::View {
            view: Box::new(view),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{recent_activity, render, TrendMode, UiState};
    use crate::metrics::{MetricsSnapshot, MetricsUpdate};

    #[test]
    fn test_client_message_deserialize_select_tab() {
        let json = r#"{"type": "select_tab", "tab": "analytics"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg, ClientMessage::SelectTab { tab: ActiveTab::Analytics });
        assert_eq!(msg.ui_event(), Some(UiEvent::SelectTab(ActiveTab::Analytics)));
    }

    #[test]
    fn test_client_message_deserialize_time_range() {
        let json = r#"{"type": "set_time_range", "range": "24h"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.ui_event(), Some(UiEvent::SetTimeRange(TimeRange::Last24Hours)));
    }

    #[test]
    fn test_client_message_deserialize_unit_variants() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "toggle_sidebar"}"#).unwrap();
        assert_eq!(msg.ui_event(), Some(UiEvent::ToggleSidebar));

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert_eq!(msg.ui_event(), None);
    }

    #[test]
    fn test_unknown_tab_rejected() {
        let json = r#"{"type": "select_tab", "tab": "settings"}"#;
        assert!(serde_json::from_str::<ClientMessage>(json).is_err());
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            connection_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"connection_id\":\"abc-123\""));
    }

    #[test]
    fn test_server_message_serialize_view() {
        let view = render(
            &UiState::default(),
            &MetricsUpdate::initial(MetricsSnapshot::default()),
            &[],
            &recent_activity(),
            TrendMode::Static,
        );
        let json: serde_json::Value = serde_json::to_value(ServerMessage::view(view)).unwrap();

        assert_eq!(json["type"], "view");
        assert_eq!(json["view"]["tick"], 0);
        assert_eq!(json["view"]["stats"][0]["value"], "$45,231");
        assert_eq!(json["view"]["header"]["time_range"], "7d");
    }
}
