//! Best-effort forwarding of looked-up stats to a bedwars.love live endpoint

use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::types::PlayerRecord;

/// Where looked-up stats go when bedwars.love forwarding is on.
///
/// `forward` must not block; the chat line is already out when it's called.
pub trait LiveForwarder: Send + Sync {
    fn forward(&self, url: &str, payload: Value, timeout: Duration);
}

/// POSTs each payload from its own task
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpForwarder;

impl LiveForwarder for HttpForwarder {
    fn forward(&self, url: &str, payload: Value, timeout: Duration) {
        let url = url.to_string();
        tokio::spawn(async move { send_live_stats(&url, payload, timeout).await });
    }
}

/// Body expected by the `/api/live` endpoint
pub fn live_payload(player: &PlayerRecord, username: &str) -> Value {
    json!({
        "uuid": player.uuid.to_string(),
        "username": username,
        "stats": player.bedwars().cloned().unwrap_or_else(Map::new),
    })
}

pub async fn send_live_stats(url: &str, payload: Value, timeout: Duration) {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(c) => c,
        Err(e) => {
            warn!("[BedwarsLove] Failed to build HTTP client: {}", e);
            return;
        }
    };
    match client.post(url).json(&payload).send().await {
        Ok(response) if !response.status().is_success() => {
            warn!("[BedwarsLove] Endpoint rejected stats: {}", response.status());
        }
        Ok(_) => debug!("[BedwarsLove] Sent stats for {}", payload["username"]),
        Err(e) => warn!("[BedwarsLove] Failed to send stats: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_bedwars_stats() {
        let player: PlayerRecord = serde_json::from_value(json!({
            "uuid": "f7c77d999f154a66a87dc4a51ef30d19",
            "displayname": "hypixel",
            "stats": {"Bedwars": {"wins_bedwars": 4}, "SkyWars": {"wins": 9}}
        }))
        .unwrap();

        let payload = live_payload(&player, "SneakyNick");
        assert_eq!(payload["uuid"], "f7c77d99-9f15-4a66-a87d-c4a51ef30d19");
        assert_eq!(payload["username"], "SneakyNick");
        assert_eq!(payload["stats"], json!({"wins_bedwars": 4}));
    }

    #[test]
    fn test_payload_without_stats_is_still_valid() {
        let payload = live_payload(&PlayerRecord::default(), "Steve");
        assert_eq!(payload["stats"], json!({}));
    }
}
