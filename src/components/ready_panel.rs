use crate::api::{HttpBoardApi, HttpGameApi};
use crate::components::{use_room_store, InviteModalComp, RoomContext};
use crate::model::network::WebSocketConnection;
use crate::model::{ApiError, BoardPostId, BrowserClipboard, ReadyActions, RoomStore};
use crate::route::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

type PanelActions = ReadyActions<HttpGameApi, HttpBoardApi, RoomContext>;

fn panel_actions(room: &RoomContext) -> PanelActions {
    ReadyActions::new(
        HttpGameApi::new(room.config.api_url.clone()),
        HttpBoardApi::new(room.config.api_url.clone()),
        room.clone(),
        room.config.invite_base_url.clone(),
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct ReadyPanelProps {
    pub board_id: Option<BoardPostId>,
    pub on_board_id_change: Callback<BoardPostId>,
    pub close_socket: Callback<()>,
    pub socket: Option<WebSocketConnection>,
    /// Post creation failures land here.
    #[prop_or_default]
    pub on_error: Callback<ApiError>,
}

/// Leave, invite and start controls of the ready room.
#[function_component(ReadyPanelComp)]
pub fn ready_panel_comp(props: &ReadyPanelProps) -> Html {
    let room = use_room_store();
    let navigator = use_navigator();
    let state = room.state();
    log::debug!(
        "Ready panel for user {:?}, room admin {:?} (admin: {}, status: {:?})",
        state.user.user_idx,
        state.room_info.admin_user_idx,
        state.is_admin(),
        state.room_status
    );

    let actions = panel_actions(&room);

    let on_leave = {
        let actions = actions.clone();
        let close_socket = props.close_socket.clone();
        Callback::from(move |_: MouseEvent| {
            let actions = actions.clone();
            let close_socket = close_socket.clone();
            spawn_local(async move {
                actions.leave(move || close_socket.emit(())).await;
            });
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let copy_action = {
        let actions = actions.clone();
        Callback::from(move |_: ()| {
            actions.copy_invite_link(&BrowserClipboard);
        })
    };

    let create_action = {
        let actions = actions.clone();
        let board_id = props.board_id;
        let on_board_id_change = props.on_board_id_change.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |(title, url): (String, String)| {
            let actions = actions.clone();
            let on_board_id_change = on_board_id_change.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                let set_board_id = |id| on_board_id_change.emit(id);
                if let Err(err) = actions
                    .create_or_update_post(board_id, set_board_id, &title, &url)
                    .await
                {
                    on_error.emit(err);
                }
            });
        })
    };

    let on_start = {
        let actions = actions.clone();
        let board_id = props.board_id;
        let socket = props.socket.clone();
        Callback::from(move |_: MouseEvent| {
            let actions = actions.clone();
            let socket = socket.clone();
            spawn_local(async move {
                actions.start_game(board_id, socket.as_ref()).await;
            });
        })
    };

    html! {
        <div class="crayon-ready-panel">
            <button class="crayon-ready-panel__button crayon-ready-panel__leave" onclick={on_leave}>
                {"나가기"}
            </button>
            <div class="crayon-ready-panel__invite">
                <InviteModalComp
                    room_idx={state.room.room_idx}
                    invite_link={AttrValue::from(actions.invite_link())}
                    {copy_action}
                    {create_action}
                />
            </div>
            <button class="crayon-ready-panel__button crayon-ready-panel__start" onclick={on_start}>
                {"게임시작"}
            </button>
        </div>
    }
}
