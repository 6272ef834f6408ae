//! Pointer tracking for the carousel.
//!
//! The host reports an absolute pointer x and a touch-down flag. This module
//! turns that stream into page-unit [`PositionInput`]s for the integrator.

use rollo_animation::{InputScale, PositionInput};
use smallvec::SmallVec;

/// Inputs produced by one pointer update. Never more than a drag and a
/// release.
pub type TouchInputs = SmallVec<[PositionInput; 2]>;

/// Converts absolute pointer positions into drag deltas.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    scale: InputScale,
    last_x: f32,
    down: bool,
}

impl TouchTracker {
    pub fn new(scale: InputScale) -> Self {
        Self {
            scale,
            last_x: 0.0,
            down: false,
        }
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn scale(&self) -> InputScale {
        self.scale
    }

    /// Records a pointer update.
    ///
    /// While the finger stays down the travel since the previous update
    /// becomes a `Drag`. Touching down catches the carousel with a zero drag;
    /// lifting without a fling yields `TouchUp`.
    pub fn update(&mut self, x: f32, down: bool) -> TouchInputs {
        let mut inputs = TouchInputs::new();
        if !x.is_finite() {
            log::warn!("ignoring non-finite pointer x {x}");
            return inputs;
        }

        if self.down {
            inputs.push(PositionInput::Drag((x - self.last_x) * self.scale.drag));
        } else if down {
            inputs.push(PositionInput::Drag(0.0));
        }
        if self.down && !down {
            inputs.push(PositionInput::TouchUp);
        }

        if self.down != down {
            log::debug!("touch {} at x={x:.3}", if down { "down" } else { "up" });
        }
        self.down = down;
        self.last_x = x;
        inputs
    }

    /// Ends the gesture with a release velocity in pointer units per second.
    pub fn fling(&mut self, velocity: f32) -> PositionInput {
        self.down = false;
        PositionInput::Fling(velocity * self.scale.fling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> TouchTracker {
        TouchTracker::new(InputScale {
            drag: 4.0,
            fling: 2.0,
        })
    }

    #[test]
    fn first_touch_catches_without_moving() {
        let mut touch = tracker();
        let inputs = touch.update(0.3, true);
        assert_eq!(inputs.as_slice(), &[PositionInput::Drag(0.0)]);
        assert!(touch.is_down());
    }

    #[test]
    fn moves_while_down_are_scaled_deltas() {
        let mut touch = tracker();
        touch.update(0.25, true);
        let inputs = touch.update(0.5, true);
        assert_eq!(inputs.as_slice(), &[PositionInput::Drag(1.0)]);
    }

    #[test]
    fn lifting_reports_the_last_delta_then_touch_up() {
        let mut touch = tracker();
        touch.update(0.5, true);
        let inputs = touch.update(0.25, false);
        assert_eq!(
            inputs.as_slice(),
            &[PositionInput::Drag(-1.0), PositionInput::TouchUp]
        );
        assert!(!touch.is_down());
    }

    #[test]
    fn hover_moves_are_ignored() {
        let mut touch = tracker();
        assert!(touch.update(0.1, false).is_empty());
        assert!(touch.update(0.9, false).is_empty());
    }

    #[test]
    fn fling_scales_velocity_and_ends_touch() {
        let mut touch = tracker();
        touch.update(0.5, true);
        assert_eq!(touch.fling(-3.0), PositionInput::Fling(-6.0));
        assert!(!touch.is_down());
    }

    #[test]
    fn non_finite_positions_are_dropped() {
        let mut touch = tracker();
        touch.update(0.5, true);
        assert!(touch.update(f32::NAN, true).is_empty());
        let inputs = touch.update(0.75, true);
        assert_eq!(inputs.as_slice(), &[PositionInput::Drag(1.0)]);
    }
}
