use crate::model::{GameSocket, NetworkError};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub type MessageCallback = Box<dyn Fn(String)>;

/// Room socket shared between the room page and the ready panel.
///
/// Outgoing frames go through an unbounded channel that a spawned task
/// drains into the socket, so sending never blocks the UI.
#[derive(Clone)]
pub struct WebSocketConnection {
    websocket_url: String,
    sender: UnboundedSender<String>,
    receiver: Rc<RefCell<Option<UnboundedReceiver<String>>>>,
    connected: Rc<Cell<bool>>,
    ws: Rc<RefCell<Option<WebSocket>>>,
}

impl PartialEq for WebSocketConnection {
    fn eq(&self, other: &Self) -> bool {
        self.websocket_url == other.websocket_url && Rc::ptr_eq(&self.connected, &other.connected)
    }
}

impl WebSocketConnection {
    pub fn new(websocket_url: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self {
            websocket_url: websocket_url.into(),
            sender,
            receiver: Rc::new(RefCell::new(Some(receiver))),
            connected: Rc::new(Cell::new(false)),
            ws: Rc::new(RefCell::new(None)),
        }
    }

    pub fn connect(&self) -> Result<(), NetworkError> {
        let ws = WebSocket::open(&self.websocket_url)
            .map_err(|e| NetworkError::ConnectionError(e.to_string()))?;
        *self.ws.borrow_mut() = Some(ws);
        self.connected.set(true);
        log::info!("Connected to {}", self.websocket_url);
        Ok(())
    }

    /// Stops the write task and drops the socket.
    pub fn close(&self) {
        self.connected.set(false);
        self.sender.close_channel();
        self.ws.borrow_mut().take();
        log::info!("Closed socket {}", self.websocket_url);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Starts the read and write tasks. Incoming text frames are handed to
    /// `callback` untouched.
    pub fn handle_messages(&self, callback: MessageCallback) {
        let ws = self.ws.borrow_mut().take();
        let receiver = self.receiver.borrow_mut().take();

        if let (Some(ws), Some(receiver)) = (ws, receiver) {
            let (write, read) = ws.split();
            self.spawn_read_task(read, callback);
            self.spawn_write_task(write, receiver);
        }
    }

    fn spawn_read_task(&self, mut read: SplitStream<WebSocket>, callback: MessageCallback) {
        let connected = self.connected.clone();
        spawn_local(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Text(text)) => callback(text),
                    Ok(Message::Bytes(_)) => log::debug!("Ignoring binary frame"),
                    Err(err) => {
                        log::warn!("Socket read failed: {}", err);
                        break;
                    }
                }
            }
            connected.set(false);
        });
    }

    fn spawn_write_task(
        &self,
        mut write: SplitSink<WebSocket, Message>,
        mut receiver: UnboundedReceiver<String>,
    ) {
        spawn_local(async move {
            while let Some(text) = receiver.next().await {
                if let Err(err) = write.send(Message::Text(text)).await {
                    log::warn!("Socket write failed: {}", err);
                    break;
                }
            }
            let _ = write.close().await;
        });
    }
}

impl GameSocket for WebSocketConnection {
    fn send_text(&self, text: String) -> Result<(), NetworkError> {
        if !self.is_connected() {
            return Err(NetworkError::NotConnected);
        }
        self.sender
            .unbounded_send(text)
            .map_err(|e| NetworkError::Send(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_before_connect_is_rejected() {
        let connection = WebSocketConnection::new("ws://localhost:8080/ws/1");

        assert!(!connection.is_connected());
        let result = connection.send_text("hello".to_string());
        assert!(matches!(result, Err(NetworkError::NotConnected)));
    }

    #[test]
    fn send_after_close_is_rejected() {
        let connection = WebSocketConnection::new("ws://localhost:8080/ws/1");
        let shared = connection.clone();

        connection.close();
        connection.close();

        assert!(!shared.is_connected());
        let result = shared.send_text("hello".to_string());
        assert!(matches!(result, Err(NetworkError::NotConnected)));
    }

    #[test]
    fn clones_compare_equal() {
        let connection = WebSocketConnection::new("ws://localhost:8080/ws/1");
        let other = WebSocketConnection::new("ws://localhost:8080/ws/1");

        assert!(connection == connection.clone());
        assert!(connection != other);
    }
}
