//! WebSocket Live Dashboards
//!
//! Every WebSocket connection mounts one dashboard view with its own
//! simulator. The server pushes the whole rendered view; the client only
//! reports UI events.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active connections and enforces the limit
//! - **ViewDriver**: Runs one view, re-rendering on ticks and UI events
//! - **Handler**: Bridges the socket to the driver
//! - **Messages**: Client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8086/api/v1/ws');
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'view') render(msg.view);
//! };
//!
//! ws.send(JSON.stringify({type: 'select_tab', tab: 'analytics'}));
//! ```

mod driver;
mod handler;
mod hub;
mod messages;

pub use driver::ViewDriver;
pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
