use super::NetworkError;
use serde::{Deserialize, Serialize};

pub const GAME_ALERT: &str = "gameAlert";

/// Outbound side of the room socket.
pub trait GameSocket {
    fn send_text(&self, text: String) -> Result<(), NetworkError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope<T> {
    #[serde(rename = "type")]
    pub message_type: String,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "gameStart")]
    GameStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAlert {
    pub status: GameStatus,
}

impl GameAlert {
    pub fn game_start() -> Self {
        Self {
            status: GameStatus::GameStart,
        }
    }
}

pub fn encode_message<T: Serialize>(
    message_type: &str,
    payload: T,
) -> Result<String, NetworkError> {
    let envelope = MessageEnvelope {
        message_type: message_type.to_string(),
        data: payload,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn send_message<S, T>(socket: &S, message_type: &str, payload: T) -> Result<(), NetworkError>
where
    S: GameSocket + ?Sized,
    T: Serialize,
{
    let text = encode_message(message_type, payload)?;
    log::debug!("Sending {} message: {}", message_type, text);
    socket.send_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSocket {
        sent: RefCell<Vec<String>>,
    }

    impl GameSocket for RecordingSocket {
        fn send_text(&self, text: String) -> Result<(), NetworkError> {
            self.sent.borrow_mut().push(text);
            Ok(())
        }
    }

    #[test]
    fn game_alert_envelope() {
        let text = encode_message(GAME_ALERT, GameAlert::game_start()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({ "type": "gameAlert", "data": { "status": "gameStart" } })
        );
    }

    #[test]
    fn send_message_writes_one_frame() {
        let socket = RecordingSocket::default();
        send_message(&socket, "chat", json!({ "text": "hi" })).unwrap();

        let sent = socket.sent.borrow();
        assert_eq!(sent.len(), 1);
        let envelope: MessageEnvelope<serde_json::Value> = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(envelope.message_type, "chat");
        assert_eq!(envelope.data, json!({ "text": "hi" }));
    }
}
