//! Bedwars stats for Hypixel
//!
//! Looks up a player through the Hypixel public API and prints a single
//! color-graded chat line with their Bedwars wins, WLR, finals and FKDR.

pub mod commands;
pub mod config;
pub mod forwarder;
pub mod game;
pub mod handlers;
pub mod hypixel;
pub mod logging;
pub mod stats;
pub mod types;
pub mod utils;

pub use config::{Config, SettingsStore};
pub use game::{ConsoleGame, GameClient};
pub use handlers::{CommandHandler, StatsHandler};
pub use hypixel::{ApiError, HypixelApi, HypixelClient};
pub use stats::{format_stats, FormattedLine};
pub use types::{BedwarsMode, PlayerLookup, PlayerRecord, SessionRecord};
