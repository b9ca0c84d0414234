//! Pointer-to-cell resolution
//!
//! The boundary between raw input and the game: selection rays cast against
//! oversized per-cell hitboxes, plus click-vs-drag classification so camera
//! gestures never place markers.

pub mod gesture;
pub mod ray;
pub mod resolver;

pub use gesture::{Gesture, GestureTracker};
pub use ray::{Aabb, Ray};
pub use resolver::{CellResolver, RayCaster};
