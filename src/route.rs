use crate::model::RoomIdx;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/room/:room_idx")]
    Room { room_idx: RoomIdx },
    #[not_found]
    #[at("/404")]
    NotFound,
}
