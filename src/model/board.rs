use super::RoomIdx;
use serde::{Deserialize, Serialize};

pub type BoardPostId = i64;

/// Title used when the host leaves the recruitment title blank.
pub const DEFAULT_POST_TITLE: &str = "같이할사람 여기여기 붙어라 :)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPost {
    pub id: BoardPostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Backend timestamps come as strings or `[y, m, d, h, min, s]` arrays.
    #[serde(default)]
    pub create_time: Option<serde_json::Value>,
    #[serde(default)]
    pub update_time: Option<serde_json::Value>,
}

pub fn post_title(title: &str) -> &str {
    if title.is_empty() {
        DEFAULT_POST_TITLE
    } else {
        title
    }
}

pub fn room_path(url: &str) -> String {
    format!("/room/{url}")
}

/// What the invite dialog hands to post creation: the typed title and the
/// room id, empty when there is no room.
pub fn invite_post(title: &str, room_idx: Option<RoomIdx>) -> (String, String) {
    let url = room_idx.map(|idx| idx.to_string()).unwrap_or_default();
    (title.to_string(), url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_falls_back_to_default() {
        assert_eq!(post_title(""), DEFAULT_POST_TITLE);
        assert_eq!(post_title("My Room"), "My Room");
    }

    #[test]
    fn whitespace_title_is_kept() {
        assert_eq!(post_title(" "), " ");
    }

    #[test]
    fn room_path_prefixes_room() {
        assert_eq!(room_path("123"), "/room/123");
    }

    #[test]
    fn board_post_tolerates_missing_fields() {
        let post: BoardPost = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(post.id, 9);
        assert!(post.title.is_empty());
        assert_eq!(post.update_time, None);
    }

    #[test]
    fn board_post_reads_backend_response() {
        let post: BoardPost = serde_json::from_str(
            r#"{"id":4,"title":"t","content":"/room/1","createTime":"2023-05-01T10:00:00","updateTime":"2023-05-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(post.content, "/room/1");
        assert_eq!(
            post.create_time,
            Some(serde_json::json!("2023-05-01T10:00:00"))
        );
    }

    #[test]
    fn board_post_reads_array_timestamps() {
        let post: BoardPost = serde_json::from_str(
            r#"{"id":11,"title":"t","content":"/room/2","createTime":[2023,5,1,10,0,0],"updateTime":[2023,5,1,10,0,0,123000000]}"#,
        )
        .unwrap();
        assert_eq!(post.id, 11);
        assert_eq!(post.create_time, Some(serde_json::json!([2023, 5, 1, 10, 0, 0])));
    }

    #[test]
    fn invite_post_uses_room_idx() {
        assert_eq!(
            invite_post("My Room", Some(123)),
            ("My Room".to_string(), "123".to_string())
        );
    }

    #[test]
    fn invite_post_without_room_has_empty_url() {
        assert_eq!(invite_post("", None), (String::new(), String::new()));
    }
}
