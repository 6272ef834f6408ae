//! Tuning profiles.
//!
//! Every constant that shaped the feel of a shipped carousel lives here so
//! variants differ only in data. Two presets reproduce the shipped feels:
//! [`TuningProfile::rollo`] (soft, the default) and
//! [`TuningProfile::all_apps`] (stiff, linear zoom).

use rollo_core::{check_range, ConfigError};

use crate::easing::Easing;
use crate::physics_table::PhysicsTable;
use crate::zoom::ZoomCurve;

/// Overscroll must stay short of a full page past either end.
pub const MAX_OVERSCROLL: f32 = 0.99;

/// Without pinning, a position more than half a page out samples the
/// neighbouring cell and would be pulled away from the valid range.
pub const MAX_UNPINNED_OVERSCROLL: f32 = 0.5;

/// Conversion from raw pointer units into page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputScale {
    /// Pages moved per unit of pointer travel while dragging.
    pub drag: f32,
    /// Pages/s per unit of reported fling velocity.
    pub fling: f32,
}

impl Default for InputScale {
    fn default() -> Self {
        Self {
            drag: 4.0,
            fling: 2.0,
        }
    }
}

/// Complete set of tunable constants for one carousel feel.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningProfile {
    pub table: PhysicsTable,
    /// Below this speed attraction always applies; above it only when it
    /// opposes the motion.
    pub accel_gate: f32,
    /// Smallest speed a deliberate flick produces, in pages/s.
    pub min_fling_speed: f32,
    /// How much the minimum fling speed shrinks toward page edges.
    pub fling_center_scale: f32,
    /// Flicks at or below this speed are not boosted to the minimum.
    pub fling_trigger: f32,
    /// Boundary damping coefficient `k` in `clamp(1 - overshoot * k, 0, cap)`.
    pub boundary_damping: f32,
    pub damping_cap: f32,
    /// Overscroll allowed past either end while the finger is down.
    pub drag_overscroll: f32,
    /// Overscroll allowed past either end during free physics.
    pub settle_overscroll: f32,
    /// Pin table lookups to the edge samples when more than half a page out
    /// of range, and skip the snap regime there.
    pub pin_outside: bool,
    pub move_to_duration: f32,
    pub move_to_easing: Easing,
    pub zoom: ZoomCurve,
    pub input: InputScale,
}

impl TuningProfile {
    /// Soft profile with proportional zoom.
    pub fn rollo() -> Self {
        Self {
            table: PhysicsTable::preset(
                [6.5, 6.5, 7.0, 6.0, -6.0, -7.0, -6.5, -6.5],
                [3.5, 3.6, 4.0, 5.0, 5.0, 4.0, 3.6, 3.5],
            ),
            accel_gate: 1.0,
            min_fling_speed: 3.5,
            fling_center_scale: 0.45,
            fling_trigger: 0.2,
            boundary_damping: 4.0,
            damping_cap: 0.9,
            drag_overscroll: 0.25,
            settle_overscroll: 0.49,
            pin_outside: true,
            move_to_duration: 0.2,
            move_to_easing: Easing::CosineInOut,
            zoom: ZoomCurve::Proportional {
                rate_in: 5.0,
                rate_out: 5.0,
                min_step: 0.03,
            },
            input: InputScale {
                drag: 4.0,
                fling: 2.0,
            },
        }
    }

    /// Stiff profile with a constant-speed zoom.
    pub fn all_apps() -> Self {
        Self {
            table: PhysicsTable::preset(
                [20.0, 20.0, 20.0, 10.0, -10.0, -20.0, -20.0, -20.0],
                [10.0, 10.0, 11.0, 15.0, 15.0, 11.0, 10.0, 10.0],
            ),
            accel_gate: 4.0,
            min_fling_speed: 3.5,
            fling_center_scale: 0.45,
            fling_trigger: 0.2,
            boundary_damping: 4.0,
            damping_cap: 0.9,
            drag_overscroll: 0.49,
            settle_overscroll: 0.49,
            pin_outside: false,
            move_to_duration: 0.2,
            move_to_easing: Easing::CosineInOut,
            zoom: ZoomCurve::Linear { rate: 1.7 },
            input: InputScale {
                drag: 5.2,
                fling: 4.0,
            },
        }
    }

    pub fn with_table(mut self, table: PhysicsTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_accel_gate(mut self, gate: f32) -> Self {
        self.accel_gate = gate;
        self
    }

    pub fn with_boundary_damping(mut self, k: f32) -> Self {
        self.boundary_damping = k;
        self
    }

    pub fn with_min_fling_speed(mut self, speed: f32, center_scale: f32) -> Self {
        self.min_fling_speed = speed;
        self.fling_center_scale = center_scale;
        self
    }

    pub fn with_overscroll(mut self, drag: f32, settle: f32) -> Self {
        self.drag_overscroll = drag;
        self.settle_overscroll = settle;
        self
    }

    pub fn with_move_to(mut self, duration: f32, easing: Easing) -> Self {
        self.move_to_duration = duration;
        self.move_to_easing = easing;
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomCurve) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_input(mut self, input: InputScale) -> Self {
        self.input = input;
        self
    }

    /// Checks every constant. Tables are validated on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("accel_gate", self.accel_gate, 0.0, f32::MAX)?;
        check_range("min_fling_speed", self.min_fling_speed, 0.0, f32::MAX)?;
        check_range("fling_center_scale", self.fling_center_scale, 0.0, 2.0)?;
        check_range("fling_trigger", self.fling_trigger, 0.0, f32::MAX)?;
        check_range("boundary_damping", self.boundary_damping, 0.0, f32::MAX)?;
        check_range("damping_cap", self.damping_cap, 0.0, 1.0)?;
        let overscroll_limit = if self.pin_outside {
            MAX_OVERSCROLL
        } else {
            MAX_UNPINNED_OVERSCROLL
        };
        check_range("drag_overscroll", self.drag_overscroll, 0.0, overscroll_limit)?;
        check_range("settle_overscroll", self.settle_overscroll, 0.0, overscroll_limit)?;
        check_range("move_to_duration", self.move_to_duration, 0.0, 60.0)?;
        check_range("input.drag", self.input.drag, f32::MIN, f32::MAX)?;
        check_range("input.fling", self.input.fling, f32::MIN, f32::MAX)?;
        self.zoom.validate()
    }

    /// Outermost position any input can reach past either end.
    pub fn max_overscroll(&self) -> f32 {
        self.drag_overscroll.max(self.settle_overscroll)
    }
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self::rollo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert_eq!(TuningProfile::rollo().validate(), Ok(()));
        assert_eq!(TuningProfile::all_apps().validate(), Ok(()));
    }

    #[test]
    fn default_is_rollo() {
        assert_eq!(TuningProfile::default(), TuningProfile::rollo());
    }

    #[test]
    fn builders_override_fields() {
        let profile = TuningProfile::rollo()
            .with_accel_gate(0.5)
            .with_boundary_damping(3.0)
            .with_move_to(0.4, Easing::Linear);
        assert_eq!(profile.accel_gate, 0.5);
        assert_eq!(profile.boundary_damping, 3.0);
        assert_eq!(profile.move_to_duration, 0.4);
        assert_eq!(profile.move_to_easing, Easing::Linear);
    }

    #[test]
    fn validate_rejects_cap_above_one() {
        let mut profile = TuningProfile::rollo();
        profile.damping_cap = 1.5;
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::OutOfRange {
                field: "damping_cap",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_overscroll_of_a_full_page() {
        let profile = TuningProfile::rollo().with_overscroll(1.0, 0.49);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn deep_overscroll_requires_pinning() {
        let pinned = TuningProfile::rollo().with_overscroll(0.25, 0.8);
        assert_eq!(pinned.validate(), Ok(()));
        let unpinned = TuningProfile::all_apps().with_overscroll(0.25, 0.8);
        assert!(matches!(
            unpinned.validate(),
            Err(ConfigError::OutOfRange {
                field: "settle_overscroll",
                ..
            })
        ));
    }

    #[test]
    fn max_overscroll_takes_the_looser_bound() {
        assert_eq!(TuningProfile::rollo().max_overscroll(), 0.49);
    }
}
