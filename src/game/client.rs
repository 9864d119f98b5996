use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::stats::FormattedLine;

/// What the stats feature needs from the game it runs in
pub trait GameClient: Clone + Send + Sync + 'static {
    /// UUID of the logged-in player, if there is one
    fn local_player_uuid(&self) -> Option<Uuid>;

    /// Queue a line for the chat. The line is written by the main loop, never
    /// by the caller's task.
    fn send_chat(&self, line: FormattedLine);
}

/// Events handed to the main loop
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Line to append to chat
    Chat(FormattedLine),
}

/// Terminal-backed game client.
///
/// Chat lines go through an unbounded channel so that only the main loop
/// touches the terminal.
#[derive(Clone)]
pub struct ConsoleGame {
    /// Local player, resolved from the configured in-game name
    local_player: Arc<RwLock<Option<Uuid>>>,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl ConsoleGame {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let game = Self {
            local_player: Arc::new(RwLock::new(None)),
            event_tx,
        };
        (game, event_rx)
    }

    /// Returns true if the stored player changed.
    pub fn set_local_player(&self, uuid: Option<Uuid>) -> bool {
        let mut current = self.local_player.write();
        if *current == uuid {
            return false;
        }
        info!("Local player changed: {:?} -> {:?}", *current, uuid);
        *current = uuid;
        true
    }
}

impl GameClient for ConsoleGame {
    fn local_player_uuid(&self) -> Option<Uuid> {
        *self.local_player.read()
    }

    fn send_chat(&self, line: FormattedLine) {
        if self.event_tx.send(GameEvent::Chat(line)).is_err() {
            debug!("Chat channel closed, dropping line");
        }
    }
}

/// Print a chat line to the terminal with its colors
pub fn print_chat(line: &FormattedLine) {
    println!("{}", line.to_ansi());
    debug!("[Chat] {}", line.plain());
}
