const DEFAULT_API_URL: &str = "https://getyourcrayon.co.kr";
const DEFAULT_WEBSOCKET_URL: &str = "wss://getyourcrayon.co.kr/ws";
const DEFAULT_INVITE_BASE_URL: &str = "https://getyourcrayon.co.kr/room/";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub websocket_url: String,
    pub invite_base_url: String,
}

impl Config {
    /// Values baked in at build time, falling back to production.
    pub fn new() -> Self {
        Self {
            api_url: option_env!("API_URL").unwrap_or(DEFAULT_API_URL).to_string(),
            websocket_url: option_env!("WEBSOCKET_URL")
                .unwrap_or(DEFAULT_WEBSOCKET_URL)
                .to_string(),
            invite_base_url: option_env!("INVITE_BASE_URL")
                .unwrap_or(DEFAULT_INVITE_BASE_URL)
                .to_string(),
        }
    }

    /// Runtime env vars win over the build-time values.
    pub fn from_env() -> Self {
        let build = Self::new();
        Self {
            api_url: std::env::var("API_URL").unwrap_or(build.api_url),
            websocket_url: std::env::var("WEBSOCKET_URL").unwrap_or(build.websocket_url),
            invite_base_url: std::env::var("INVITE_BASE_URL").unwrap_or(build.invite_base_url),
        }
    }

    /// Socket url for one room.
    pub fn room_websocket_url(&self, room_idx: i64) -> String {
        format!("{}/{}", self.websocket_url.trim_end_matches('/'), room_idx)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_websocket_url_appends_room() {
        let config = Config {
            api_url: String::new(),
            websocket_url: "ws://localhost:8080/ws/".to_string(),
            invite_base_url: String::new(),
        };
        assert_eq!(config.room_websocket_url(12), "ws://localhost:8080/ws/12");
    }

    #[test]
    fn invite_base_url_ends_with_room_segment() {
        if option_env!("INVITE_BASE_URL").is_none() {
            assert_eq!(Config::new().invite_base_url, "https://getyourcrayon.co.kr/room/");
        }
    }

    #[test]
    fn from_env_overrides_build_values() {
        std::env::set_var("API_URL", "http://localhost:8080");
        std::env::set_var("WEBSOCKET_URL", "ws://localhost:8080/ws");
        std::env::set_var("INVITE_BASE_URL", "http://localhost:3000/room/");

        let config = Config::from_env();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.websocket_url, "ws://localhost:8080/ws");
        assert_eq!(config.invite_base_url, "http://localhost:3000/room/");

        std::env::remove_var("API_URL");
        std::env::remove_var("WEBSOCKET_URL");
        std::env::remove_var("INVITE_BASE_URL");

        assert_eq!(Config::from_env(), Config::new());
    }
}
