//! Click vs. drag classification
//!
//! A press only counts as a cell selection when the pointer barely moves
//! and is released quickly; anything else belongs to the camera and never
//! reaches the resolver.

use crate::consts::{CLICK_MAX_DRIFT_PX, CLICK_MAX_DURATION_MS};

/// Outcome of a completed press/release pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Quick, stationary tap; carries the release position in client pixels
    Select { x: f32, y: f32 },
    /// The pointer drifted or lingered; the camera owns this gesture
    CameraDrag,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    x: f32,
    y: f32,
    time_ms: f64,
    dragged: bool,
}

/// Tracks one pointer press at a time
#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    press: Option<Press>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer or touch went down at client position (x, y)
    pub fn press(&mut self, x: f32, y: f32, time_ms: f64) {
        self.press = Some(Press {
            x,
            y,
            time_ms,
            dragged: false,
        });
    }

    /// Pointer moved; drift past the threshold latches the press as a drag
    pub fn moved(&mut self, x: f32, y: f32) {
        if let Some(press) = &mut self.press {
            if (x - press.x).abs() > CLICK_MAX_DRIFT_PX || (y - press.y).abs() > CLICK_MAX_DRIFT_PX
            {
                press.dragged = true;
            }
        }
    }

    /// Pointer released; classifies and clears the press.
    ///
    /// `None` when no press was being tracked (e.g. the press started
    /// outside the canvas).
    pub fn release(&mut self, x: f32, y: f32, time_ms: f64) -> Option<Gesture> {
        let press = self.press.take()?;
        if !press.dragged && time_ms - press.time_ms < CLICK_MAX_DURATION_MS {
            Some(Gesture::Select { x, y })
        } else {
            Some(Gesture::CameraDrag)
        }
    }

    /// True while a press is being tracked
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Drop any in-flight press (focus loss, pointer left the canvas)
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_tap_selects() {
        let mut tracker = GestureTracker::new();
        tracker.press(100.0, 100.0, 0.0);
        assert_eq!(
            tracker.release(102.0, 101.0, 50.0),
            Some(Gesture::Select { x: 102.0, y: 101.0 })
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_slow_press_is_a_drag() {
        let mut tracker = GestureTracker::new();
        tracker.press(100.0, 100.0, 0.0);
        assert_eq!(tracker.release(100.0, 100.0, 350.0), Some(Gesture::CameraDrag));
    }

    #[test]
    fn test_duration_threshold_is_exclusive() {
        let mut tracker = GestureTracker::new();
        tracker.press(0.0, 0.0, 1000.0);
        assert_eq!(
            tracker.release(0.0, 0.0, 1000.0 + CLICK_MAX_DURATION_MS),
            Some(Gesture::CameraDrag)
        );

        tracker.press(0.0, 0.0, 1000.0);
        assert!(matches!(
            tracker.release(0.0, 0.0, 1000.0 + CLICK_MAX_DURATION_MS - 1.0),
            Some(Gesture::Select { .. })
        ));
    }

    #[test]
    fn test_drift_on_either_axis_is_a_drag() {
        let mut tracker = GestureTracker::new();
        tracker.press(100.0, 100.0, 0.0);
        tracker.moved(100.0, 106.0);
        assert_eq!(tracker.release(100.0, 100.0, 50.0), Some(Gesture::CameraDrag));

        tracker.press(100.0, 100.0, 0.0);
        tracker.moved(93.0, 100.0);
        assert_eq!(tracker.release(100.0, 100.0, 50.0), Some(Gesture::CameraDrag));
    }

    #[test]
    fn test_drift_at_threshold_still_selects() {
        let mut tracker = GestureTracker::new();
        tracker.press(100.0, 100.0, 0.0);
        tracker.moved(100.0 + CLICK_MAX_DRIFT_PX, 100.0);
        assert!(matches!(
            tracker.release(100.0, 100.0, 50.0),
            Some(Gesture::Select { .. })
        ));
    }

    #[test]
    fn test_drag_latches_even_if_pointer_returns() {
        let mut tracker = GestureTracker::new();
        tracker.press(100.0, 100.0, 0.0);
        tracker.moved(150.0, 100.0);
        tracker.moved(100.0, 100.0);
        assert_eq!(tracker.release(100.0, 100.0, 50.0), Some(Gesture::CameraDrag));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.release(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_cancel_drops_press() {
        let mut tracker = GestureTracker::new();
        tracker.press(0.0, 0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.release(0.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.moved(500.0, 500.0);
        tracker.press(0.0, 0.0, 0.0);
        assert!(matches!(
            tracker.release(0.0, 0.0, 10.0),
            Some(Gesture::Select { .. })
        ));
    }
}
