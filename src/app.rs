use crayon_ready_room::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
fn home_page() -> Html {
    let navigator = use_navigator();
    let room_input = use_state(String::new);

    let on_input = {
        let room_input = room_input.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            room_input.set(input.value());
        })
    };

    let on_enter = {
        let room_input = room_input.clone();
        Callback::from(move |_: MouseEvent| match room_input.trim().parse::<RoomIdx>() {
            Ok(room_idx) => {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Room { room_idx });
                }
            }
            Err(_) => log::warn!("Invalid room number: {}", *room_input),
        })
    };

    html! {
        <div class="crayon-home">
            <input
                class="crayon-home__room"
                type="text"
                placeholder="방 번호"
                value={(*room_input).clone()}
                oninput={on_input}
            />
            <button class="crayon-home__enter" onclick={on_enter}>{"입장"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RoomPageProps {
    room_idx: RoomIdx,
}

#[function_component(RoomPage)]
fn room_page(props: &RoomPageProps) -> Html {
    let room = use_room_store();
    let socket = use_state(|| None::<WebSocketConnection>);
    let board_id = use_state(|| None::<BoardPostId>);

    {
        let room = room.clone();
        let socket = socket.clone();
        use_effect_with(props.room_idx, move |room_idx| {
            room.dispatch(RoomAction::SetRoomIdx(Some(*room_idx)));
            let connection = WebSocketConnection::new(room.config.room_websocket_url(*room_idx));
            match connection.connect() {
                Ok(()) => {
                    connection.handle_messages(Box::new(|message| {
                        log::debug!("Room message: {}", message);
                    }));
                    socket.set(Some(connection.clone()));
                }
                Err(err) => log::error!("Failed to join room socket: {}", err),
            }
            move || connection.close()
        });
    }

    let close_socket = {
        let socket = socket.clone();
        Callback::from(move |_: ()| {
            if let Some(connection) = &*socket {
                connection.close();
            }
            socket.set(None);
        })
    };

    let on_board_id_change = {
        let board_id = board_id.clone();
        Callback::from(move |id: BoardPostId| board_id.set(Some(id)))
    };

    let on_error = Callback::from(|err: ApiError| {
        log::error!("Failed to create board post: {}", err);
    });

    let state = room.state();

    html! {
        <div class="crayon-room">
            <h2 class="crayon-room__title">{format!("Room {}", props.room_idx)}</h2>
            <div class="crayon-room__user">{&state.user.user_nickname}</div>
            <ReadyPanelComp
                board_id={*board_id}
                {on_board_id_change}
                {close_socket}
                socket={(*socket).clone()}
                {on_error}
            />
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Room { room_idx } => html! { <RoomPage {room_idx} /> },
        Route::NotFound => html! { <h1>{"404"}</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = Config::from_env();

    html! {
        <BrowserRouter>
            <RoomProvider {config}>
                <Switch<Route> render={switch} />
            </RoomProvider>
        </BrowserRouter>
    }
}
