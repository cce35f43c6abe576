mod invite_modal;
mod ready_panel;
mod room_provider;

pub use invite_modal::{InviteModalComp, InviteModalProps};
pub use ready_panel::{ReadyPanelComp, ReadyPanelProps};
pub use room_provider::{use_room_store, RoomContext, RoomProvider, RoomProviderProps};
