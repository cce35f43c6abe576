pub mod api;
#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;
#[cfg(feature = "yew")]
pub mod route;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::api::{HttpBoardApi, HttpGameApi};
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::model::network::WebSocketConnection;
    pub use crate::model::ApiError;
    pub use crate::model::BoardApi;
    pub use crate::model::BoardPostId;
    pub use crate::model::Clipboard;
    pub use crate::model::GameApi;
    pub use crate::model::GameSocket;
    pub use crate::model::NetworkError;
    pub use crate::model::ReadyActions;
    pub use crate::model::RoomAction;
    pub use crate::model::RoomIdx;
    pub use crate::model::RoomState;
    pub use crate::model::RoomStore;
    pub use crate::model::UserIdentity;
    #[cfg(feature = "yew")]
    pub use crate::route::Route;
}
