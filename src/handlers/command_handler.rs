use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::key_validator::spawn_key_check;
use super::stats_handler::StatsHandler;
use crate::commands::{parse_command, Command};
use crate::config::{Config, SettingsStore};
use crate::forwarder::{HttpForwarder, LiveForwarder};
use crate::game::GameClient;
use crate::hypixel::{ApiError, HypixelApi};
use crate::stats::{ChatColor, FormattedLine};
use crate::types::BedwarsMode;

/// Builds an API client from the current settings, `Ok(None)` when no key is set
pub type Connector<A> = fn(&Config) -> Result<Option<A>, ApiError>;

/// Runs console commands against the settings store and the Hypixel API.
pub struct CommandHandler<A, G> {
    settings: SettingsStore,
    game: G,
    connect: Connector<A>,
    api: Arc<RwLock<Option<Arc<A>>>>,
    forwarder: Arc<dyn LiveForwarder>,
}

impl<A: HypixelApi + 'static, G: GameClient> CommandHandler<A, G> {
    pub fn new(settings: SettingsStore, game: G, connect: Connector<A>) -> Self {
        Self {
            settings,
            game,
            connect,
            api: Arc::new(RwLock::new(None)),
            forwarder: Arc::new(HttpForwarder),
        }
    }

    pub fn with_forwarder(mut self, forwarder: Arc<dyn LiveForwarder>) -> Self {
        self.forwarder = forwarder;
        self
    }

    /// (Re)creates the API client from the stored key.
    ///
    /// Returns the key check task when a client was created.
    pub fn connect(&self) -> Option<JoinHandle<()>> {
        let config = self.settings.snapshot();
        match (self.connect)(&config) {
            Ok(Some(api)) => {
                let api = Arc::new(api);
                *self.api.write() = Some(api.clone());
                info!("Hypixel API client ready");
                Some(spawn_key_check(api, self.game.clone()))
            }
            Ok(None) => {
                *self.api.write() = None;
                info!("No Hypixel API key configured");
                None
            }
            Err(e) => {
                *self.api.write() = None;
                warn!("Could not create Hypixel API client: {}", e);
                self.game.send_chat(
                    FormattedLine::new().colored(ChatColor::Red, "[BedwarsStats] Invalid API Key format!"),
                );
                None
            }
        }
    }

    /// Parses and runs one line of input.
    ///
    /// Lookups run in a spawned task, whose handle is returned.
    pub fn handle_line(&self, input: &str) -> Option<JoinHandle<()>> {
        match parse_command(input) {
            Ok(command) => self.handle(command),
            Err(e) => {
                self.game.send_chat(FormattedLine::new().colored(ChatColor::Red, e.to_string()));
                None
            }
        }
    }

    pub fn handle(&self, command: Command) -> Option<JoinHandle<()>> {
        match command {
            Command::Stats { username, mode } => return self.lookup(username, mode),
            Command::SetApiKey(key) => {
                if self.persist(|s| s.set_api_key(&key)) {
                    self.confirm("API key updated.");
                    return self.connect();
                }
            }
            Command::SetMyNick(nick) => {
                if self.persist(|s| s.set_my_nick(&nick)) {
                    if nick.is_empty() {
                        self.confirm("Nick cleared.");
                    } else {
                        self.confirm(&format!("Nick set to {}.", nick));
                    }
                }
            }
            Command::SetMode(mode) => {
                if self.persist(|s| s.set_bedwars_mode(mode)) {
                    self.confirm(&format!("Mode set to {}.", mode));
                }
            }
            Command::SetBedwarsLove(enabled) => {
                if self.persist(|s| s.set_send_to_bedwars_love(enabled)) {
                    self.confirm(if enabled {
                        "bedwars.love forwarding enabled."
                    } else {
                        "bedwars.love forwarding disabled."
                    });
                }
            }
            Command::SetBedwarsLoveUrl(url) => {
                if self.persist(|s| s.set_bedwars_love_api_url(&url)) {
                    self.confirm(&format!("bedwars.love endpoint set to {}.", url));
                }
            }
            Command::ShowSettings => self.show_settings(),
            Command::Help => self.show_help(),
        }
        None
    }

    fn lookup(&self, username: String, mode: Option<BedwarsMode>) -> Option<JoinHandle<()>> {
        let Some(api) = self.api.read().clone() else {
            self.game
                .send_chat(FormattedLine::new().colored(ChatColor::Red, "Hypixel API Key not set!"));
            return None;
        };

        let config = self.settings.snapshot();
        let mode = mode.unwrap_or(config.bedwars_mode);
        let handler = StatsHandler::new(api, self.game.clone()).with_forwarder(self.forwarder.clone());
        Some(tokio::spawn(async move {
            handler.lookup_and_report(&config, &username, mode).await
        }))
    }

    fn persist<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&SettingsStore) -> anyhow::Result<()>,
    {
        match apply(&self.settings) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save settings: {:#}", e);
                self.game.send_chat(
                    FormattedLine::new().colored(ChatColor::Red, "[BedwarsStats] Failed to save settings!"),
                );
                false
            }
        }
    }

    fn confirm(&self, message: &str) {
        self.game.send_chat(
            FormattedLine::new()
                .colored(ChatColor::Green, "[BedwarsStats] ")
                .reset()
                .text(message),
        );
    }

    fn show_settings(&self) {
        let config = self.settings.snapshot();
        let key = match config.active_api_key() {
            Some(_) if self.api.read().is_some() => "set",
            Some(_) => "invalid",
            None => "not set",
        };
        let nick = if config.my_nick.is_empty() { "-" } else { config.my_nick.as_str() };
        let forwarding = if config.send_to_bedwars_love { "on" } else { "off" };

        for (name, value) in [
            ("API key", key.to_string()),
            ("My nick", nick.to_string()),
            ("Mode", config.bedwars_mode.to_string()),
            ("bedwars.love", format!("{} ({})", forwarding, config.bedwars_love_api_url)),
        ] {
            self.game.send_chat(
                FormattedLine::new()
                    .colored(ChatColor::Gold, format!("{}: ", name))
                    .colored(ChatColor::White, value),
            );
        }
    }

    fn show_help(&self) {
        for (usage, what) in [
            ("/bw <player> [mode]", "show Bedwars stats"),
            ("/bwm settings", "show settings"),
            ("/bwm settings apikey <key>", "set your Hypixel API key"),
            ("/bwm settings mynick [nick]", "set or clear your nick"),
            ("/bwm settings mode <mode>", "overall, solo, doubles, threes or fours"),
            ("/bwm settings bedwarslove <on|off>", "forward stats to bedwars.love"),
            ("/bwm settings bedwarsloveurl <url>", "bedwars.love endpoint"),
        ] {
            self.game.send_chat(
                FormattedLine::new()
                    .colored(ChatColor::Green, usage)
                    .colored(ChatColor::Gray, format!(" - {}", what)),
            );
        }
    }
}
