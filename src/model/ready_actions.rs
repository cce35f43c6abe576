use super::board::{post_title, room_path};
use super::message::{send_message, GameAlert, GameSocket, GAME_ALERT};
use super::{ApiError, BoardApi, BoardPostId, Clipboard, GameApi, RoomStore};

/// The ready room's side effects.
///
/// Each operation keeps its own failure policy: room exit and post update
/// are logged and swallowed, post creation is returned to the caller, post
/// deletion and the missing-socket case are ignored.
#[derive(Clone)]
pub struct ReadyActions<G, B, R>
where
    G: GameApi,
    B: BoardApi,
    R: RoomStore,
{
    game_api: G,
    board_api: B,
    store: R,
    invite_base_url: String,
}

impl<G, B, R> ReadyActions<G, B, R>
where
    G: GameApi,
    B: BoardApi,
    R: RoomStore,
{
    pub fn new(game_api: G, board_api: B, store: R, invite_base_url: impl Into<String>) -> Self {
        Self {
            game_api,
            board_api,
            store,
            invite_base_url: invite_base_url.into(),
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Leaves the room on the server, then clears the room id whatever the
    /// outcome was.
    pub async fn leave_room(&self) {
        match self.game_api.out_room().await {
            Ok(()) => log::info!("Left room {:?}", self.store.room_idx()),
            Err(err) => log::warn!("Failed to leave room: {}", err),
        }
        self.store.set_room_idx(None);
    }

    /// Closes the socket and leaves the room. Neither step waits on the
    /// other's result.
    pub async fn leave<F>(&self, close_socket: F)
    where
        F: FnOnce(),
    {
        close_socket();
        self.leave_room().await;
    }

    /// No check on the room id: without a room the last segment is empty.
    pub fn invite_link(&self) -> String {
        let room_idx = self
            .store
            .room_idx()
            .map(|idx| idx.to_string())
            .unwrap_or_default();
        format!("{}{}", self.invite_base_url, room_idx)
    }

    pub fn copy_invite_link<C>(&self, clipboard: &C)
    where
        C: Clipboard + ?Sized,
    {
        let link = self.invite_link();
        log::debug!("Copying invite link {}", link);
        clipboard.write_text(&link);
    }

    /// Creates the recruitment post, or bumps the existing one.
    ///
    /// Creation errors are returned. Update errors are only logged.
    pub async fn create_or_update_post<F>(
        &self,
        board_id: Option<BoardPostId>,
        set_board_id: F,
        title: &str,
        url: &str,
    ) -> Result<(), ApiError>
    where
        F: FnOnce(BoardPostId),
    {
        match board_id {
            None => {
                let post = self
                    .board_api
                    .create_post(post_title(title), &room_path(url))
                    .await?;
                log::info!("Created board post {}", post.id);
                set_board_id(post.id);
            }
            Some(id) => match self.board_api.update_post(id).await {
                Ok(post) => log::info!("Updated board post {} ({})", id, post.title),
                Err(err) => log::warn!("Failed to update board post {}: {}", id, err),
            },
        }
        Ok(())
    }

    /// The tracked id is left as is after deletion.
    // TODO: clear the parent's board id once the backend confirms stale ids
    // should be dropped instead of updated.
    pub async fn delete_post(&self, id: Option<BoardPostId>) {
        if let Some(id) = id {
            let _ = self.board_api.delete_post(id).await;
        }
    }

    /// Sends the start notification. Returns whether a frame was handed to
    /// the socket.
    pub fn announce_game_start<S>(&self, socket: Option<&S>) -> bool
    where
        S: GameSocket + ?Sized,
    {
        let Some(socket) = socket else {
            return false;
        };
        match send_message(socket, GAME_ALERT, GameAlert::game_start()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send game start: {}", err);
                false
            }
        }
    }

    /// Drops the recruitment post and tells the room the game starts.
    pub async fn start_game<S>(&self, board_id: Option<BoardPostId>, socket: Option<&S>)
    where
        S: GameSocket + ?Sized,
    {
        let cleanup = self.delete_post(board_id);
        let announce = async { self.announce_game_start(socket) };
        futures::join!(cleanup, announce);
    }
}
