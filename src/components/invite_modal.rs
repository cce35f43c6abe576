use crate::model::{invite_post, RoomIdx};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InviteModalProps {
    pub room_idx: Option<RoomIdx>,
    pub invite_link: AttrValue,
    pub copy_action: Callback<()>,
    /// Receives `(title, room id)`.
    pub create_action: Callback<(String, String)>,
}

#[function_component(InviteModalComp)]
pub fn invite_modal_comp(props: &InviteModalProps) -> Html {
    let open = use_state(|| false);
    let copied = use_state(|| false);
    let title = use_state(String::new);

    let toggle = {
        let open = open.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            copied.set(false);
            open.set(!*open);
        })
    };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            title.set(input.value());
        })
    };

    let on_copy = {
        let copy_action = props.copy_action.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            copy_action.emit(());
            copied.set(true);
        })
    };

    let on_create = {
        let create_action = props.create_action.clone();
        let room_idx = props.room_idx;
        let title = title.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            create_action.emit(invite_post(&title, room_idx));
            open.set(false);
        })
    };

    html! {
        <div class="crayon-invite">
            <button class="crayon-ready-panel__button" onclick={toggle.clone()}>{"초대하기"}</button>
            if *open {
                <div class="crayon-invite__modal">
                    <div class="crayon-invite__row">
                        <code class="crayon-invite__link">{props.invite_link.clone()}</code>
                        <button class="crayon-invite__copy" onclick={on_copy}>
                            {if *copied { "복사됨" } else { "링크 복사" }}
                        </button>
                    </div>
                    <div class="crayon-invite__row">
                        <input
                            class="crayon-invite__title"
                            type="text"
                            placeholder={crate::model::DEFAULT_POST_TITLE}
                            value={(*title).clone()}
                            oninput={on_title_input}
                        />
                        <button class="crayon-invite__post" onclick={on_create}>{"모집글 올리기"}</button>
                    </div>
                    <button class="crayon-invite__close" onclick={toggle}>{"닫기"}</button>
                </div>
            }
        </div>
    }
}
