//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.
//! Each connection mounts one dashboard view backed by a [`ViewDriver`].

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::driver::ViewDriver;
use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::metrics::MetricsSnapshot;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let hub = Arc::clone(&state.ws_hub);
    let (mut sender, mut receiver) = socket.split();

    // Channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connection_id = match hub.register(tx.clone()).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected WebSocket connection");
            if let Ok(text) = serde_json::to_string(&ServerMessage::error(e.to_string())) {
                let _ = sender.send(Message::Text(text)).await;
            }
            let _ = sender.close().await;
            return;
        }
    };

    let _ = tx.send(ServerMessage::Connected {
        connection_id: connection_id.clone(),
    });

    let driver = match ViewDriver::start(connection_id.clone(), &state.config.simulator, tx) {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!(connection_id = %connection_id, error = %e, "Failed to mount view");
            let _ = hub.send_to(&connection_id, ServerMessage::error(e.to_string())).await;
            hub.unregister(&connection_id).await;
            drain(&mut rx, &mut sender).await;
            return;
        }
    };

    let conn_id_for_send = connection_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel::<ClientMessage>();
    let driver_task = tokio::spawn(driver.run(inbound_rx));

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    // Task to receive messages from WebSocket and hand them to the driver
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&hub_for_recv, &conn_id_for_recv, &inbound_tx, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either side to finish
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    // Both socket halves are gone, so the driver unmounts on its own
    unmount(&hub, &connection_id, driver_task).await;
}

/// Wait for the driver to stop its simulator, then drop the connection
async fn unmount(hub: &ConnectionHub, connection_id: &str, driver_task: JoinHandle<MetricsSnapshot>) {
    match driver_task.await {
        Ok(last) => tracing::debug!(
            connection_id = %connection_id,
            revenue = last.revenue,
            active_users = last.active_users,
            "Session closed"
        ),
        Err(e) => tracing::error!(connection_id = %connection_id, error = %e, "View driver failed"),
    }
    hub.unregister(connection_id).await;
}

/// Flush queued messages before giving up on a connection
async fn drain<S>(rx: &mut mpsc::UnboundedReceiver<ServerMessage>, sender: &mut S)
where
    S: SinkExt<Message> + Unpin,
{
    while let Ok(msg) = rx.try_recv() {
        if let Ok(text) = serde_json::to_string(&msg) {
            if sender.send(Message::Text(text)).await.is_err() {
                return;
            }
        }
    }
    let _ = sender.close().await;
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(
    hub: &Arc<ConnectionHub>,
    connection_id: &str,
    inbound: &mpsc::UnboundedSender<ClientMessage>,
    message: Message,
) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    tracing::trace!(connection_id = %connection_id, message = ?client_msg, "Client message");
                    return inbound.send(client_msg).is_ok();
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    // Send error but keep connection open
                    let error_msg = ServerMessage::error(format!("Invalid message format: {}", e));
                    let _ = hub.send_to(connection_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::error("Binary messages not supported");
            let _ = hub.send_to(connection_id, error_msg).await;
            true
        }
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{ActiveTab, DashboardSession, TrendMode};
    use crate::metrics::{ManualTicks, MetricsSimulator, ScriptedRandom};
    use crate::websocket::hub::{ConnectionId, HubConfig};

    struct Connection {
        hub: Arc<ConnectionHub>,
        id: ConnectionId,
        outbound: mpsc::UnboundedReceiver<ServerMessage>,
        inbound_tx: mpsc::UnboundedSender<ClientMessage>,
        inbound_rx: mpsc::UnboundedReceiver<ClientMessage>,
    }

    async fn connect() -> Connection {
        let hub = Arc::new(ConnectionHub::new(HubConfig::default()));
        let (tx, outbound) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();

        Connection {
            hub,
            id,
            outbound,
            inbound_tx,
            inbound_rx,
        }
    }

    async fn receive(conn: &Connection, message: Message) -> bool {
        handle_ws_message(&conn.hub, &conn.id, &conn.inbound_tx, message).await
    }

    fn assert_error_queued(conn: &mut Connection) {
        match conn.outbound.try_recv() {
            Ok(ServerMessage::Error { .. }) => {}
            other => panic!("expected error message, got {:?}", other),
        }
        assert!(conn.inbound_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_valid_message_forwarded() {
        let mut conn = connect().await;
        let text = r#"{"type":"select_tab","tab":"reports"}"#.to_string();

        assert!(receive(&conn, Message::Text(text)).await);
        assert_eq!(
            conn.inbound_rx.try_recv().unwrap(),
            ClientMessage::SelectTab { tab: ActiveTab::Reports }
        );
        assert!(conn.outbound.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unknown_tab_reports_error_and_stays_open() {
        let mut conn = connect().await;
        let text = r#"{"type":"select_tab","tab":"settings"}"#.to_string();

        assert!(receive(&conn, Message::Text(text)).await);
        assert_error_queued(&mut conn);
    }

    #[tokio::test]
    async fn test_unknown_range_reports_error_and_stays_open() {
        let mut conn = connect().await;
        let text = r#"{"type":"set_time_range","range":"1y"}"#.to_string();

        assert!(receive(&conn, Message::Text(text)).await);
        assert_error_queued(&mut conn);
    }

    #[tokio::test]
    async fn test_malformed_json_reports_error_and_stays_open() {
        let mut conn = connect().await;

        assert!(receive(&conn, Message::Text("{not json".to_string())).await);
        assert_error_queued(&mut conn);
    }

    #[tokio::test]
    async fn test_binary_frame_reports_error_and_stays_open() {
        let mut conn = connect().await;

        assert!(receive(&conn, Message::Binary(vec![1, 2, 3])).await);
        assert_error_queued(&mut conn);
    }

    #[tokio::test]
    async fn test_close_frame_ends_connection() {
        let mut conn = connect().await;

        assert!(!receive(&conn, Message::Close(None)).await);
        assert!(conn.outbound.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_ping_frames_ignored() {
        let mut conn = connect().await;

        assert!(receive(&conn, Message::Ping(vec![9])).await);
        assert!(conn.outbound.try_recv().is_err());
        assert!(conn.inbound_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unmount_stops_simulator_before_unregister() {
        let conn = connect().await;

        let mut chart_random = ScriptedRandom::new(vec![70], vec![]);
        let session = DashboardSession::new(&mut chart_random, TrendMode::Static);
        let random = ScriptedRandom::new(vec![100, 10, 3], vec![0.05]);
        let simulator = MetricsSimulator::new(MetricsSnapshot::default(), Box::new(random)).unwrap();
        let (trigger, ticks) = ManualTicks::channel();

        let (out_tx, _out_rx) = mpsc::unbounded_channel();
        let driver = ViewDriver::new(conn.id.clone(), session, simulator.spawn(ticks), out_tx);
        let driver_task = tokio::spawn(driver.run(conn.inbound_rx));

        // Socket closed: the inbound side goes away
        drop(conn.inbound_tx);
        unmount(&conn.hub, &conn.id, driver_task).await;

        assert_eq!(conn.hub.connection_count().await, 0);
        assert!(!trigger.fire());
    }
}
