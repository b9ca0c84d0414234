//! Outbound game events
//!
//! The core publishes typed events; presentation layers (scene, status UI,
//! audio) subscribe through `EventSink`. Nothing in `game` depends on any
//! subscriber.

use serde::{Deserialize, Serialize};

use super::board::{Cell, Player};

/// Notification emitted by a completed state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A marker was committed to the board
    MarkerPlaced { cell: Cell, player: Player },
    /// The game continues and it is now `next`'s move
    TurnChanged { next: Player },
    /// `player` completed a line
    Won { player: Player },
    /// All 27 cells are occupied and no line was completed
    Draw,
    /// The board was cleared back to the initial state
    Reset,
}

/// Presentation-layer subscriber
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}
