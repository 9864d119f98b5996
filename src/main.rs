use anyhow::Result;
use bedwars_stats::{
    game::{print_chat, ConsoleGame, GameEvent},
    handlers::CommandHandler,
    hypixel::{resolve_uuid, HypixelClient},
    logging::init_logger,
    SettingsStore,
};
use dialoguer::Input;
use std::sync::Arc;
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logger()?;
    info!("Starting Bedwars Stats v{}", VERSION);

    // Load or create configuration
    let settings = SettingsStore::load()?;
    let config = settings.snapshot();

    // Prompt for missing values on first start
    if config.active_api_key().is_none() {
        let key: String = Input::new()
            .with_prompt("Enter your Hypixel API key (leave empty to skip)")
            .allow_empty(true)
            .interact_text()?;
        if !key.trim().is_empty() {
            settings.set_api_key(&key)?;
        }
    }

    if config.ingame_name.is_none() {
        let name: String = Input::new()
            .with_prompt("Enter your ingame name (leave empty to skip)")
            .allow_empty(true)
            .interact_text()?;
        settings.set_ingame_name(Some(name))?;
    }

    let config = settings.snapshot();
    info!("Mode: {}", config.bedwars_mode);
    info!(
        "bedwars.love forwarding: {}",
        if config.send_to_bedwars_love { "ENABLED" } else { "DISABLED" }
    );

    let (game, mut game_rx) = ConsoleGame::new();

    // Resolve the local player so looking up your own nick works
    if let Some(name) = config.ingame_name.clone() {
        let game = game.clone();
        let timeout = config.request_timeout();
        tokio::spawn(async move {
            let client = match reqwest::Client::builder().timeout(timeout).build() {
                Ok(c) => c,
                Err(e) => {
                    warn!("Failed to build HTTP client: {}", e);
                    return;
                }
            };
            match resolve_uuid(&client, &name).await {
                Ok(Some(uuid)) => {
                    game.set_local_player(Some(uuid));
                }
                Ok(None) => warn!("No Minecraft account named {}", name),
                Err(e) => warn!("Could not resolve UUID for {}: {}", name, e),
            }
        });
    }

    let handler = Arc::new(CommandHandler::new(
        settings.clone(),
        game.clone(),
        HypixelClient::from_config,
    ));
    handler.connect();

    info!("Console interface ready - type commands and press Enter:");
    info!("  /bw <player> [mode] - Show Bedwars stats");
    info!("  /bwm settings - Show or change settings");

    // Spawn console input handler
    let handler_for_console = handler.clone();
    tokio::spawn(async move {
        use tokio::io::{stdin, AsyncBufReadExt, BufReader};

        let mut lines = BufReader::new(stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            handler_for_console.handle_line(input);
        }
        info!("Console input closed");
    });

    // Chat is only ever written from here
    loop {
        tokio::select! {
            event = game_rx.recv() => match event {
                Some(GameEvent::Chat(line)) => print_chat(&line),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
