mod websocket_connection;

pub use websocket_connection::{MessageCallback, WebSocketConnection};
