mod endpoints;

#[cfg(feature = "yew")]
mod http;

pub use endpoints::{
    create_post_endpoint, delete_post_endpoint, error_message, out_room_endpoint,
    update_post_endpoint,
};

#[cfg(feature = "yew")]
pub use http::{HttpBoardApi, HttpGameApi};
