//! In-memory stand-ins used by the handler tests

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::forwarder::LiveForwarder;
use crate::game::{ConsoleGame, GameEvent};
use crate::hypixel::{ApiError, HypixelApi};
use crate::types::{PlayerLookup, PlayerRecord, SessionRecord};

#[derive(Default)]
pub struct FakeApi {
    pub players: HashMap<Uuid, PlayerRecord>,
    pub names: HashMap<String, Uuid>,
    pub sessions: HashMap<Uuid, SessionRecord>,
    pub fail_players: bool,
    pub invalid_key: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_player(mut self, name: &str, uuid: Uuid, extra: Value) -> Self {
        let mut record = json!({"uuid": uuid.to_string(), "displayname": name});
        if let (Some(record), Some(extra)) = (record.as_object_mut(), extra.as_object()) {
            record.extend(extra.clone());
        }
        let record: PlayerRecord = serde_json::from_value(record).unwrap();
        self.names.insert(name.to_lowercase(), uuid);
        self.players.insert(uuid, record);
        self
    }

    pub fn with_session(mut self, uuid: Uuid, session: SessionRecord) -> Self {
        self.sessions.insert(uuid, session);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.invalid_key {
            return Err(ApiError::from_cause(403, "Invalid API key"));
        }
        if self.fail_players {
            return Err(ApiError::from_cause(502, "Bad Gateway"));
        }
        Ok(())
    }
}

#[async_trait]
impl HypixelApi for FakeApi {
    async fn player_by_uuid(&self, uuid: Uuid) -> Result<PlayerLookup, ApiError> {
        self.calls.lock().push(format!("player_by_uuid {}", uuid));
        self.check()?;
        Ok(match self.players.get(&uuid) {
            Some(p) => PlayerLookup::Found(Box::new(p.clone())),
            None => PlayerLookup::NotFound,
        })
    }

    async fn player_by_name(&self, name: &str) -> Result<PlayerLookup, ApiError> {
        self.calls.lock().push(format!("player_by_name {}", name));
        self.check()?;
        Ok(match self.names.get(&name.to_lowercase()).and_then(|u| self.players.get(u)) {
            Some(p) => PlayerLookup::Found(Box::new(p.clone())),
            None => PlayerLookup::NotFound,
        })
    }

    async fn status(&self, uuid: Uuid) -> Result<SessionRecord, ApiError> {
        self.calls.lock().push(format!("status {}", uuid));
        self.sessions
            .get(&uuid)
            .cloned()
            .ok_or_else(|| ApiError::from_cause(500, "status unavailable"))
    }
}

/// Keeps every forwarded `(url, payload)` instead of sending it
#[derive(Default)]
pub struct RecordingForwarder {
    sent: Mutex<Vec<(String, Value)>>,
}

impl RecordingForwarder {
    pub fn sent(&self) -> Vec<(String, Value)> {
        self.sent.lock().clone()
    }
}

impl LiveForwarder for RecordingForwarder {
    fn forward(&self, url: &str, payload: Value, _timeout: Duration) {
        self.sent.lock().push((url.to_string(), payload));
    }
}

/// Everything the console game has queued so far, as legacy-formatted strings
pub fn drain_chat(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(GameEvent::Chat(line)) = rx.try_recv() {
        lines.push(line.to_legacy());
    }
    lines
}

pub fn console() -> (ConsoleGame, mpsc::UnboundedReceiver<GameEvent>) {
    ConsoleGame::new()
}
