use crate::model::BoardPostId;
use serde::Deserialize;

pub fn out_room_endpoint(api_url: &str) -> String {
    format!("{}/api/game/room", api_url.trim_end_matches('/'))
}

pub fn create_post_endpoint(api_url: &str) -> String {
    format!("{}/api/board/create", api_url.trim_end_matches('/'))
}

pub fn update_post_endpoint(api_url: &str, id: BoardPostId) -> String {
    format!(
        "{}/api/board/update/?boardId={}",
        api_url.trim_end_matches('/'),
        id
    )
}

pub fn delete_post_endpoint(api_url: &str, id: BoardPostId) -> String {
    format!(
        "{}/api/board/delete/?boardId={}",
        api_url.trim_end_matches('/'),
        id
    )
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls `message` out of an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let api = "https://getyourcrayon.co.kr/";
        assert_eq!(out_room_endpoint(api), "https://getyourcrayon.co.kr/api/game/room");
        assert_eq!(
            create_post_endpoint(api),
            "https://getyourcrayon.co.kr/api/board/create"
        );
        assert_eq!(
            update_post_endpoint(api, 42),
            "https://getyourcrayon.co.kr/api/board/update/?boardId=42"
        );
        assert_eq!(
            delete_post_endpoint("", 7),
            "/api/board/delete/?boardId=7"
        );
    }

    #[test]
    fn error_message_from_json_body() {
        let body = r#"{"message":"Article not found."}"#;
        assert_eq!(error_message(body), "Article not found.");
    }

    #[test]
    fn error_message_from_plain_body() {
        assert_eq!(error_message(" Server error.\n"), "Server error.");
    }
}
