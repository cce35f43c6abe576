use super::{ApiError, BoardPost, BoardPostId};
use async_trait::async_trait;

/// Game room endpoints the ready room needs.
#[async_trait(?Send)]
pub trait GameApi {
    async fn out_room(&self) -> Result<(), ApiError>;
}

/// Recruitment board endpoints.
#[async_trait(?Send)]
pub trait BoardApi {
    async fn create_post(&self, title: &str, content: &str) -> Result<BoardPost, ApiError>;
    async fn update_post(&self, id: BoardPostId) -> Result<BoardPost, ApiError>;
    async fn delete_post(&self, id: BoardPostId) -> Result<(), ApiError>;
}
