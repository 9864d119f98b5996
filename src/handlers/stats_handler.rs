use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::forwarder::{live_payload, HttpForwarder, LiveForwarder};
use crate::game::GameClient;
use crate::hypixel::HypixelApi;
use crate::stats::{format_stats, ChatColor, FormattedLine};
use crate::types::{BedwarsMode, PlayerLookup};

/// Looks up one player and reports their Bedwars stats to chat.
pub struct StatsHandler<A, G> {
    api: Arc<A>,
    game: G,
    forwarder: Arc<dyn LiveForwarder>,
}

impl<A: HypixelApi, G: GameClient> StatsHandler<A, G> {
    pub fn new(api: Arc<A>, game: G) -> Self {
        Self {
            api,
            game,
            forwarder: Arc::new(HttpForwarder),
        }
    }

    pub fn with_forwarder(mut self, forwarder: Arc<dyn LiveForwarder>) -> Self {
        self.forwarder = forwarder;
        self
    }

    /// Player lookup, then status lookup, then at most one chat line.
    ///
    /// `config` is the snapshot taken when the command was issued.
    pub async fn lookup_and_report(&self, config: &Config, username: &str, mode: BedwarsMode) {
        let self_nick = config.is_my_nick(username);

        let lookup = if self_nick {
            let Some(uuid) = self.game.local_player_uuid() else {
                debug!("[Stats] {} is my nick but the local player is unknown, skipping", username);
                return;
            };
            self.api.player_by_uuid(uuid).await
        } else {
            self.api.player_by_name(username).await
        };

        let player = match lookup {
            Ok(PlayerLookup::Found(player)) => player,
            Ok(PlayerLookup::NotFound) => {
                info!("[Stats] {} is nicked", username);
                self.game.send_chat(
                    FormattedLine::new()
                        .colored(ChatColor::Yellow, username)
                        .reset()
                        .text(" is nicked, stats cannot be retrieved."),
                );
                return;
            }
            Err(e) => {
                error!("[Stats] Error fetching player data for {}: {}", username, e);
                self.game.send_chat(
                    FormattedLine::new()
                        .colored(ChatColor::Red, "[BedwarsStats] Error fetching player data!"),
                );
                return;
            }
        };

        let session = match self.api.status(player.uuid).await {
            Ok(session) => Some(session),
            Err(e) => {
                // Stats are still shown, just without the status segment
                warn!("[Stats] Error fetching player status for {}: {}", username, e);
                None
            }
        };

        let display_name = if self_nick || player.name.is_empty() {
            username
        } else {
            player.name.as_str()
        };

        let line = format_stats(&player, display_name, session.as_ref(), mode);
        if !line.is_empty() {
            self.game.send_chat(line);
        }

        if let Some(url) = config.active_bedwars_love_url() {
            self.forwarder
                .forward(url, live_payload(&player, display_name), config.request_timeout());
        }
    }
}
