mod api;
mod board;
mod clipboard;
mod error;
mod message;
mod ready_actions;
mod room;

#[cfg(feature = "yew")]
pub mod network;

pub use api::{BoardApi, GameApi};
pub use board::{
    invite_post, post_title, room_path, BoardPost, BoardPostId, CreatePostRequest,
    DEFAULT_POST_TITLE,
};
#[cfg(feature = "yew")]
pub use clipboard::BrowserClipboard;
pub use clipboard::Clipboard;
pub use error::{ApiError, NetworkError};
pub use message::{
    encode_message, send_message, GameAlert, GameSocket, GameStatus, MessageEnvelope, GAME_ALERT,
};
pub use ready_actions::ReadyActions;
pub use room::{
    MemoryRoomStore, RoomAction, RoomIdentity, RoomIdx, RoomInfo, RoomState, RoomStatus,
    RoomStore, UserIdentity, UserIdx,
};
