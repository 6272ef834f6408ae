//! Zoom integrator.
//!
//! Zoom runs from 0 (carousel hidden) to 1 (fully shown) and chases a
//! target set by the host. The approach never stalls: small steps are
//! raised to a floor and the final step lands exactly on the target.

use rollo_core::{check_range, ConfigError};

/// Below this both zoom and target count as fully hidden.
pub const HIDDEN_ZOOM: f32 = 0.001;

/// How zoom approaches its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomCurve {
    /// First-order filter: each step covers `rate * dt` of the remaining
    /// distance, at least `min_step`. Separate rates for zooming in and out.
    /// `min_step` must be positive or the approach never reaches the target.
    Proportional {
        rate_in: f32,
        rate_out: f32,
        min_step: f32,
    },
    /// Constant speed of `rate` zoom units per second.
    Linear { rate: f32 },
}

impl ZoomCurve {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            ZoomCurve::Proportional {
                rate_in,
                rate_out,
                min_step,
            } => {
                check_range("zoom.rate_in", rate_in, f32::MIN_POSITIVE, f32::MAX)?;
                check_range("zoom.rate_out", rate_out, f32::MIN_POSITIVE, f32::MAX)?;
                check_range("zoom.min_step", min_step, f32::MIN_POSITIVE, 1.0)
            }
            ZoomCurve::Linear { rate } => {
                check_range("zoom.rate", rate, f32::MIN_POSITIVE, f32::MAX)
            }
        }
    }

    /// Raw step for one frame, before overshoot handling.
    fn step(&self, zoom: f32, target: f32, dt: f32) -> f32 {
        match *self {
            ZoomCurve::Proportional {
                rate_in,
                rate_out,
                min_step,
            } => {
                let rate = if target > zoom { rate_in } else { rate_out };
                let delta = (target - zoom) * dt * rate;
                if delta != 0.0 && delta.abs() < min_step {
                    min_step.copysign(delta)
                } else {
                    delta
                }
            }
            ZoomCurve::Linear { rate } => (dt * rate).copysign(target - zoom),
        }
    }
}

impl Default for ZoomCurve {
    fn default() -> Self {
        ZoomCurve::Proportional {
            rate_in: 5.0,
            rate_out: 5.0,
            min_step: 0.03,
        }
    }
}

/// Zoom value and the target it moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    pub zoom: f32,
    pub target: f32,
}

#[derive(Debug, Clone)]
pub struct ZoomIntegrator {
    state: ZoomState,
    curve: ZoomCurve,
}

impl ZoomIntegrator {
    pub fn new(curve: ZoomCurve) -> Self {
        Self {
            state: ZoomState::default(),
            curve,
        }
    }

    pub fn with_zoom(curve: ZoomCurve, zoom: f32) -> Self {
        let zoom = sanitize(zoom).unwrap_or(0.0);
        Self {
            state: ZoomState { zoom, target: zoom },
            curve,
        }
    }

    /// Sets the target for subsequent [`step`](Self::step) calls.
    pub fn set_target(&mut self, target: f32) {
        match sanitize(target) {
            Some(target) => self.state.target = target,
            None => log::warn!("ignoring non-finite zoom target {target}"),
        }
    }

    /// Jumps straight to `target` without animating.
    pub fn set(&mut self, target: f32) {
        match sanitize(target) {
            Some(target) => {
                self.state.target = target;
                self.state.zoom = target;
            }
            None => log::warn!("ignoring non-finite zoom {target}"),
        }
    }

    /// Moves toward `target` by one frame. Returns whether zoom changed.
    pub fn advance(&mut self, dt: f32, target: f32) -> bool {
        self.set_target(target);
        self.step(dt)
    }

    /// Moves toward the current target by one frame. Returns whether zoom
    /// changed.
    pub fn step(&mut self, dt: f32) -> bool {
        let ZoomState { zoom, target } = self.state;
        if zoom == target || !dt.is_finite() || dt <= 0.0 {
            return false;
        }

        let delta = self.curve.step(zoom, target, dt);
        let next = zoom + delta;
        // A step too small to move the float lands on the target instead.
        if (target - zoom).abs() <= delta.abs() || next == zoom {
            self.state.zoom = target;
        } else {
            self.state.zoom = next;
        }
        self.state.zoom != zoom
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn target(&self) -> f32 {
        self.state.target
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn curve(&self) -> ZoomCurve {
        self.curve
    }

    pub fn is_settled(&self) -> bool {
        self.state.zoom == self.state.target
    }

    /// True when both the value and its target are effectively zero.
    pub fn is_hidden(&self) -> bool {
        self.state.zoom < HIDDEN_ZOOM && self.state.target < HIDDEN_ZOOM
    }

    /// Cubic ease of the remaining zoom distance, `(1 - zoom)^3`. Renderers
    /// use it to slide chrome in as the carousel opens.
    pub fn animation(&self) -> f32 {
        (1.0 - self.state.zoom).powi(3)
    }
}

impl Default for ZoomIntegrator {
    fn default() -> Self {
        Self::new(ZoomCurve::default())
    }
}

fn sanitize(value: f32) -> Option<f32> {
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "tests/zoom_tests.rs"]
mod tests;
