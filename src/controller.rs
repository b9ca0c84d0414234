//! Orchestration
//!
//! `GameController` is the single writer: it feeds classified pointer input
//! through the resolver into the state machine and fans the resulting
//! events out to subscribers. Rejected input never escapes as an error:
//! expected rejections (occupied cell, finished game) are quietly dropped,
//! the defensive kinds are logged.

use glam::Vec2;

use crate::game::{BoardError, Cell, EventSink, Game, GameEvent, PlaceError};
use crate::picking::{CellResolver, Gesture, GestureTracker, RayCaster};

/// Viewport size in client pixels, used to normalize pointer positions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Client pixels to normalized device coordinates (y flipped to point up)
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -((y / self.height) * 2.0 - 1.0),
        )
    }
}

/// Owns the game, the resolver, and the subscriber list
pub struct GameController {
    game: Game,
    resolver: CellResolver,
    gesture: GestureTracker,
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    /// Start from an existing position (e.g. a resumed save)
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            resolver: CellResolver::new(),
            gesture: GestureTracker::new(),
            sinks: Vec::new(),
        }
    }

    /// Read-only view of the game state
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32, time_ms: f64) {
        self.gesture.press(x, y, time_ms);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.gesture.moved(x, y);
    }

    /// Completes the gesture; places a marker when it was a quick tap over
    /// a cell. Returns the cell that was committed, if any.
    pub fn pointer_released(
        &mut self,
        x: f32,
        y: f32,
        time_ms: f64,
        caster: &impl RayCaster,
        viewport: Viewport,
    ) -> Option<Cell> {
        match self.gesture.release(x, y, time_ms)? {
            Gesture::Select { x, y } => {
                let cell = self.resolver.resolve_pointer(caster, viewport.to_ndc(x, y))?;
                self.place(cell)
            }
            Gesture::CameraDrag => None,
        }
    }

    /// Cell under the pointer right now; no state change
    pub fn hover_probe(
        &self,
        x: f32,
        y: f32,
        caster: &impl RayCaster,
        viewport: Viewport,
    ) -> Option<Cell> {
        self.resolver.resolve_pointer(caster, viewport.to_ndc(x, y))
    }

    /// Place for the current player, mapping rejections to no-ops
    pub fn place(&mut self, cell: Cell) -> Option<Cell> {
        let player = self.game.current_player();
        match self.game.place_marker(cell, player) {
            Ok(events) => {
                for event in &events {
                    self.dispatch(event);
                }
                Some(cell)
            }
            // Taps on taken cells and taps after the end are expected noise
            Err(err @ (PlaceError::GameOver | PlaceError::Board(BoardError::Occupied(_)))) => {
                log::debug!("ignored placement at {cell}: {err}");
                None
            }
            // Unreachable while input is serialized through one controller
            Err(err) => {
                log::warn!("rejected placement at {cell}: {err}");
                None
            }
        }
    }

    /// Start a new game; subscribers are notified
    pub fn reset(&mut self) {
        let event = self.game.reset();
        self.gesture.cancel();
        self.dispatch(&event);
        log::info!("game reset, {} to move", self.game.current_player());
    }

    fn dispatch(&mut self, event: &GameEvent) {
        for sink in &mut self.sinks {
            sink.on_event(event);
        }
    }
}
