//! Turn sequencing and terminal-state machine
//!
//! `Game` is the single writer of the board. Everything that must survive a
//! save/resume round trip lives here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::{Board, BoardError, Cell, Player};
use super::events::GameEvent;
use super::lines::evaluate_win;

/// Terminal status of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are still being accepted
    InProgress,
    /// A line was completed; no further moves
    Won(Player),
    /// The board filled with no line completed; no further moves
    Draw,
}

/// Placement rejections
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The game already ended
    #[error("the game is over")]
    GameOver,
    /// A player tried to move out of turn
    #[error("it is not {0}'s turn")]
    WrongTurn(Player),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Complete game state, mutated only through `place_marker` and `reset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current: Player,
    phase: Phase,
    /// Successful placements since the last reset
    moves: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            phase: Phase::InProgress,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Commit `player`'s marker at `cell`.
    ///
    /// All validation happens before the single board write, so an `Err`
    /// leaves the state untouched. On success the returned events describe
    /// the transition in order: the placement, then the outcome (win, draw,
    /// or handover). A move that both completes a line and fills the board
    /// reports the win.
    pub fn place_marker(
        &mut self,
        cell: Cell,
        player: Player,
    ) -> Result<Vec<GameEvent>, PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        if player != self.current {
            return Err(PlaceError::WrongTurn(player));
        }
        self.board.set(cell, player.mark())?;
        self.moves += 1;

        let mut events = vec![GameEvent::MarkerPlaced { cell, player }];
        if evaluate_win(&self.board, cell, player) {
            self.phase = Phase::Won(player);
            events.push(GameEvent::Won { player });
        } else if self.board.is_full() {
            self.phase = Phase::Draw;
            events.push(GameEvent::Draw);
        } else {
            self.current = player.opponent();
            events.push(GameEvent::TurnChanged { next: self.current });
        }
        Ok(events)
    }

    /// Clear everything back to a fresh game, whatever the current phase
    pub fn reset(&mut self) -> GameEvent {
        *self = Self::new();
        GameEvent::Reset
    }

    /// Build a mid-game position directly; test support only
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, current: Player, moves: u32) -> Self {
        Self {
            board,
            current,
            phase: Phase::InProgress,
            moves,
        }
    }
}
