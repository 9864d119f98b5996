use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::BedwarsMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hypixel API key
    #[serde(default)]
    pub api_key: String,

    /// Your own nick, so looking it up shows your real stats
    #[serde(default)]
    pub my_nick: String,

    #[serde(default)]
    pub bedwars_mode: BedwarsMode,

    #[serde(default)]
    pub send_to_bedwars_love: bool,

    #[serde(default = "default_bedwars_love_api_url")]
    pub bedwars_love_api_url: String,

    /// Account name of the local player
    #[serde(default)]
    pub ingame_name: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

// Default values
fn default_bedwars_love_api_url() -> String {
    "http://localhost:3000/api/live".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            my_nick: String::new(),
            bedwars_mode: BedwarsMode::Overall,
            send_to_bedwars_love: false,
            bedwars_love_api_url: default_bedwars_love_api_url(),
            ingame_name: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Returns the API key only if it is non-empty.
    pub fn active_api_key(&self) -> Option<&str> {
        Some(self.api_key.trim()).filter(|k| !k.is_empty())
    }

    /// Returns the bedwars.love endpoint when forwarding is switched on.
    pub fn active_bedwars_love_url(&self) -> Option<&str> {
        Some(self.bedwars_love_api_url.as_str())
            .filter(|u| self.send_to_bedwars_love && !u.is_empty())
    }

    /// True when `username` is the configured nick (case-insensitive)
    pub fn is_my_nick(&self, username: &str) -> bool {
        !self.my_nick.is_empty() && self.my_nick.eq_ignore_ascii_case(username)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bedwars_love_api_url, "http://localhost:3000/api/live");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_mode_parses_and_falls_back() {
        let config: Config = toml::from_str("bedwars_mode = \"DOUBLES\"").unwrap();
        assert_eq!(config.bedwars_mode, BedwarsMode::Doubles);

        let config: Config = toml::from_str("bedwars_mode = \"TEAMS\"").unwrap();
        assert_eq!(config.bedwars_mode, BedwarsMode::Overall);
    }

    #[test]
    fn test_is_my_nick() {
        let mut config = Config::default();
        assert!(!config.is_my_nick(""));
        assert!(!config.is_my_nick("Someone"));

        config.my_nick = "SneakyNick".into();
        assert!(config.is_my_nick("sneakynick"));
        assert!(config.is_my_nick("SNEAKYNICK"));
        assert!(!config.is_my_nick("SneakyNick2"));
    }

    #[test]
    fn test_active_values() {
        let mut config = Config::default();
        assert_eq!(config.active_api_key(), None);
        assert_eq!(config.active_bedwars_love_url(), None);

        config.api_key = "  abc ".into();
        config.send_to_bedwars_love = true;
        assert_eq!(config.active_api_key(), Some("abc"));
        assert_eq!(config.active_bedwars_love_url(), Some("http://localhost:3000/api/live"));
    }
}
