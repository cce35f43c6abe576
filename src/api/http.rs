use super::endpoints::{
    create_post_endpoint, delete_post_endpoint, error_message, out_room_endpoint,
    update_post_endpoint,
};
use crate::model::{ApiError, BoardApi, BoardPost, BoardPostId, CreatePostRequest, GameApi};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status,
        message: error_message(&body),
    })
}

async fn read_post(response: Response) -> Result<BoardPost, ApiError> {
    check(response)
        .await?
        .json::<BoardPost>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpGameApi {
    api_url: String,
}

impl HttpGameApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl GameApi for HttpGameApi {
    async fn out_room(&self) -> Result<(), ApiError> {
        let response = Request::delete(&out_room_endpoint(&self.api_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check(response).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpBoardApi {
    api_url: String,
}

impl HttpBoardApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl BoardApi for HttpBoardApi {
    async fn create_post(&self, title: &str, content: &str) -> Result<BoardPost, ApiError> {
        let body = CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
        };
        let response = Request::post(&create_post_endpoint(&self.api_url))
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_post(response).await
    }

    async fn update_post(&self, id: BoardPostId) -> Result<BoardPost, ApiError> {
        let response = Request::put(&update_post_endpoint(&self.api_url, id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_post(response).await
    }

    async fn delete_post(&self, id: BoardPostId) -> Result<(), ApiError> {
        let response = Request::delete(&delete_post_endpoint(&self.api_url, id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check(response).await?;
        Ok(())
    }
}
