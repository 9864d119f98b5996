use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};
use uuid::{uuid, Uuid};

use crate::game::GameClient;
use crate::hypixel::HypixelApi;
use crate::stats::{ChatColor, FormattedLine};

/// A player that always exists, so only the key can make the lookup fail
const KNOWN_PLAYER: Uuid = uuid!("f7c77d99-9f15-4a66-a87d-c4a51ef30d19");

/// Checks that Hypixel accepts the configured key.
///
/// Only a rejected key is reported to chat; anything else is logged.
pub async fn check_api_key<A: HypixelApi, G: GameClient>(api: &A, game: &G) {
    match api.player_by_uuid(KNOWN_PLAYER).await {
        Ok(_) => debug!("[KeyCheck] API key accepted"),
        Err(e) if e.is_invalid_key() => {
            warn!("[KeyCheck] Hypixel rejected the API key");
            game.send_chat(FormattedLine::new().colored(
                ChatColor::Red,
                "[BedwarsStats] Your Hypixel API key appears to be invalid or expired!",
            ));
            game.send_chat(
                FormattedLine::new()
                    .colored(ChatColor::Yellow, "Run ")
                    .colored(ChatColor::Green, "/bwm settings apikey <key> ")
                    .colored(ChatColor::Yellow, "to set a new one."),
            );
        }
        Err(e) => error!("[KeyCheck] Error while checking API key validity: {}", e),
    }
}

/// Runs [`check_api_key`] in the background
pub fn spawn_key_check<A, G>(api: Arc<A>, game: G) -> JoinHandle<()>
where
    A: HypixelApi + 'static,
    G: GameClient,
{
    tokio::spawn(async move { check_api_key(api.as_ref(), &game).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{console, drain_chat, FakeApi};
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_key_is_silent() {
        let api = Arc::new(FakeApi::default().with_player("hypixel", KNOWN_PLAYER, json!({})));
        let (game, mut rx) = console();

        spawn_key_check(api.clone(), game).await.unwrap();

        assert!(drain_chat(&mut rx).is_empty());
        assert_eq!(api.calls(), vec![format!("player_by_uuid {}", KNOWN_PLAYER)]);
    }

    #[tokio::test]
    async fn test_invalid_key_prints_guidance() {
        let api = FakeApi {
            invalid_key: true,
            ..Default::default()
        };
        let (game, mut rx) = console();

        check_api_key(&api, &game).await;

        assert_eq!(
            drain_chat(&mut rx),
            vec![
                "§c[BedwarsStats] Your Hypixel API key appears to be invalid or expired!".to_string(),
                "§eRun §a/bwm settings apikey <key> §eto set a new one.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_other_errors_are_only_logged() {
        let api = FakeApi {
            fail_players: true,
            ..Default::default()
        };
        let (game, mut rx) = console();

        check_api_key(&api, &game).await;

        assert!(drain_chat(&mut rx).is_empty());
    }
}
