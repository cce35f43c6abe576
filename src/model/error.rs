use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Socket is not connected")]
    NotConnected,
    #[error("Failed to open socket: {0}")]
    ConnectionError(String),
    #[error("Failed to serialize message")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to send message: {0}")]
    Send(String),
}
