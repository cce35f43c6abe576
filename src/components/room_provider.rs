use crate::config::Config;
use crate::model::{RoomAction, RoomIdx, RoomState, RoomStore};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for RoomState {
    type Action = RoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Shared room state handed down through Yew context.
#[derive(Clone, PartialEq)]
pub struct RoomContext {
    pub state: UseReducerHandle<RoomState>,
    pub config: Rc<Config>,
}

impl RoomContext {
    pub fn dispatch(&self, action: RoomAction) {
        self.state.dispatch(action);
    }
}

impl RoomStore for RoomContext {
    fn state(&self) -> RoomState {
        (*self.state).clone()
    }

    fn set_room_idx(&self, room_idx: Option<RoomIdx>) {
        self.dispatch(RoomAction::SetRoomIdx(room_idx));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct RoomProviderProps {
    pub children: Children,
    #[prop_or_default]
    pub config: Config,
    #[prop_or_default]
    pub initial_state: RoomState,
}

#[function_component(RoomProvider)]
pub fn room_provider(props: &RoomProviderProps) -> Html {
    let state = {
        let initial_state = props.initial_state.clone();
        use_reducer(move || initial_state)
    };
    let config = use_memo(props.config.clone(), |config| config.clone());

    let context = RoomContext { state, config };

    html! {
        <ContextProvider<RoomContext> context={context}>
            {props.children.clone()}
        </ContextProvider<RoomContext>>
    }
}

#[hook]
pub fn use_room_store() -> RoomContext {
    use_context::<RoomContext>().expect("use_room_store must be used within a RoomProvider")
}
