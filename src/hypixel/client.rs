use super::error::ApiError;
use super::mojang::resolve_uuid;
use crate::config::Config;
use crate::types::{PlayerLookup, PlayerRecord, SessionRecord};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const HYPIXEL_API_URL: &str = "https://api.hypixel.net/v2";

/// The lookups the stats feature needs from Hypixel
#[async_trait]
pub trait HypixelApi: Send + Sync {
    async fn player_by_uuid(&self, uuid: Uuid) -> Result<PlayerLookup, ApiError>;

    async fn player_by_name(&self, name: &str) -> Result<PlayerLookup, ApiError>;

    async fn status(&self, uuid: Uuid) -> Result<SessionRecord, ApiError>;
}

#[derive(Deserialize)]
struct PlayerBody {
    #[serde(default)]
    player: Option<PlayerRecord>,
}

#[derive(Deserialize)]
struct StatusBody {
    #[serde(default)]
    session: SessionRecord,
}

/// Checks the `success`/`cause` envelope, then decodes the body
fn parse_reply<T: DeserializeOwned>(status: StatusCode, body: Value) -> Result<T, ApiError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success || !status.is_success() {
        let cause = body
            .get("cause")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());
        return Err(ApiError::from_cause(status.as_u16(), cause));
    }
    Ok(serde_json::from_value(body)?)
}

#[derive(Clone)]
pub struct HypixelClient {
    api_key: Uuid,
    client: Client,
}

impl HypixelClient {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, ApiError> {
        let api_key = Uuid::parse_str(api_key.trim())
            .map_err(|_| ApiError::MalformedKey(api_key.to_string()))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { api_key, client })
    }

    /// `Ok(None)` when no API key is configured
    pub fn from_config(config: &Config) -> Result<Option<Self>, ApiError> {
        config
            .active_api_key()
            .map(|key| Self::new(key, config.request_timeout()))
            .transpose()
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, uuid: Uuid) -> Result<T, ApiError> {
        debug!("[Hypixel] GET /{} uuid={}", endpoint, uuid);
        let response = self
            .client
            .get(format!("{}/{}", HYPIXEL_API_URL, endpoint))
            .header("API-Key", self.api_key.to_string())
            .query(&[("uuid", uuid.simple().to_string())])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        parse_reply(status, body)
    }
}

#[async_trait]
impl HypixelApi for HypixelClient {
    async fn player_by_uuid(&self, uuid: Uuid) -> Result<PlayerLookup, ApiError> {
        let body: PlayerBody = self.get("player", uuid).await?;
        Ok(match body.player {
            Some(player) => PlayerLookup::Found(Box::new(player)),
            None => PlayerLookup::NotFound,
        })
    }

    async fn player_by_name(&self, name: &str) -> Result<PlayerLookup, ApiError> {
        match resolve_uuid(&self.client, name).await? {
            Some(uuid) => self.player_by_uuid(uuid).await,
            None => Ok(PlayerLookup::NotFound),
        }
    }

    async fn status(&self, uuid: Uuid) -> Result<SessionRecord, ApiError> {
        let body: StatusBody = self.get("status", uuid).await?;
        Ok(body.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_malformed_key() {
        let err = HypixelClient::new("not-a-key", Duration::from_secs(1)).err().unwrap();
        assert!(matches!(err, ApiError::MalformedKey(_)));
        assert!(HypixelClient::new("f7c77d99-9f15-4a66-a87d-c4a51ef30d19", Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_from_config_without_key() {
        let config = Config::default();
        assert!(HypixelClient::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_parse_player_reply() {
        let body = json!({
            "success": true,
            "player": {"uuid": "f7c77d999f154a66a87dc4a51ef30d19", "displayname": "hypixel"}
        });
        let parsed: PlayerBody = parse_reply(StatusCode::OK, body).unwrap();
        assert_eq!(parsed.player.unwrap().name, "hypixel");

        let parsed: PlayerBody = parse_reply(StatusCode::OK, json!({"success": true, "player": null})).unwrap();
        assert!(parsed.player.is_none());
    }

    #[test]
    fn test_parse_status_reply() {
        let body = json!({
            "success": true,
            "uuid": "f7c77d999f154a66a87dc4a51ef30d19",
            "session": {"online": true, "gameType": "BEDWARS", "mode": "LOBBY"}
        });
        let parsed: StatusBody = parse_reply(StatusCode::OK, body).unwrap();
        assert!(parsed.session.online);
        assert_eq!(parsed.session.server_type_name(), "Bed Wars");
    }

    #[test]
    fn test_invalid_key_reply() {
        let body = json!({"success": false, "cause": "Invalid API key"});
        let err = parse_reply::<PlayerBody>(StatusCode::FORBIDDEN, body).err().unwrap();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn test_other_failures_are_not_invalid_key() {
        let body = json!({"success": false, "cause": "Key throttle"});
        let err = parse_reply::<PlayerBody>(StatusCode::TOO_MANY_REQUESTS, body).err().unwrap();
        assert!(matches!(err, ApiError::BadResponse { status: 429, .. }));

        let err = parse_reply::<PlayerBody>(StatusCode::BAD_GATEWAY, json!({})).err().unwrap();
        assert!(!err.is_invalid_key());
    }
}
