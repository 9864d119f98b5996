pub mod client;

pub use client::{print_chat, ConsoleGame, GameClient, GameEvent};
