use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

pub type RoomIdx = i64;
pub type UserIdx = i64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomIdentity {
    pub room_idx: Option<RoomIdx>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_idx: Option<UserIdx>,
    pub user_nickname: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub admin_user_idx: Option<UserIdx>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    Ready,
}

/// Everything the ready room reads from the shared store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoomState {
    pub room: RoomIdentity,
    pub user: UserIdentity,
    pub room_info: RoomInfo,
    pub room_status: RoomStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    SetRoomIdx(Option<RoomIdx>),
    SetUser(UserIdentity),
    SetRoomInfo(RoomInfo),
    SetRoomStatus(RoomStatus),
}

impl RoomState {
    pub fn apply(&mut self, action: RoomAction) {
        match action {
            RoomAction::SetRoomIdx(room_idx) => self.room.room_idx = room_idx,
            RoomAction::SetUser(user) => self.user = user,
            RoomAction::SetRoomInfo(room_info) => self.room_info = room_info,
            RoomAction::SetRoomStatus(status) => self.room_status = status,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.user_idx.is_some() && self.user.user_idx == self.room_info.admin_user_idx
    }
}

/// Read access to the shared room state plus the one mutation the ready
/// room performs.
pub trait RoomStore {
    fn state(&self) -> RoomState;
    fn set_room_idx(&self, room_idx: Option<RoomIdx>);

    fn room_idx(&self) -> Option<RoomIdx> {
        self.state().room.room_idx
    }
}

/// Store backed by a shared cell, for hosts that keep state outside Yew.
#[derive(Debug, Default, Clone)]
pub struct MemoryRoomStore {
    state: Rc<RefCell<RoomState>>,
}

impl MemoryRoomStore {
    pub fn new(state: RoomState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn dispatch(&self, action: RoomAction) {
        self.state.borrow_mut().apply(action);
    }
}

impl RoomStore for MemoryRoomStore {
    fn state(&self) -> RoomState {
        self.state.borrow().clone()
    }

    fn set_room_idx(&self, room_idx: Option<RoomIdx>) {
        self.dispatch(RoomAction::SetRoomIdx(room_idx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_room() {
        let state = RoomState::default();
        assert_eq!(state.room.room_idx, None);
        assert_eq!(state.room_status, RoomStatus::Ready);
    }

    #[test]
    fn actions_update_state() {
        let store = MemoryRoomStore::default();
        store.dispatch(RoomAction::SetRoomIdx(Some(5)));
        store.dispatch(RoomAction::SetUser(UserIdentity {
            user_idx: Some(1),
            user_nickname: "crayon".to_string(),
        }));
        store.dispatch(RoomAction::SetRoomInfo(RoomInfo {
            admin_user_idx: Some(1),
        }));

        let state = store.state();
        assert_eq!(store.room_idx(), Some(5));
        assert_eq!(state.user.user_nickname, "crayon");
        assert!(state.is_admin());

        store.dispatch(RoomAction::SetRoomStatus(RoomStatus::Ready));
        assert_eq!(store.state().room_status, RoomStatus::Ready);

        store.set_room_idx(None);
        assert_eq!(store.room_idx(), None);
    }

    #[test]
    fn unknown_user_is_not_admin() {
        let state = RoomState::default();
        assert!(!state.is_admin());
    }

    #[test]
    fn room_identity_uses_camel_case() {
        let json = serde_json::to_string(&RoomIdentity { room_idx: Some(3) }).unwrap();
        assert_eq!(json, r#"{"roomIdx":3}"#);
    }
}
