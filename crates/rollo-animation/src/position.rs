//! Page position integrator.
//!
//! Position is a continuous page coordinate: integers are page centers.
//! Each frame the integrator runs exactly one regime, picked by priority:
//!
//! 1. **Dragging**: the finger owns the position; physics is paused.
//! 2. **Moving to**: a scripted eased transition to a fixed page.
//! 3. **Free physics**: table-driven attraction toward the nearest page
//!    center against friction. Weak motion glides onto the center; out of
//!    range a soft brake applies.

use std::mem;

use rollo_core::ConfigError;

use crate::physics_table::TableSample;
use crate::profile::TuningProfile;

/// Remaining move-to time treated as finished. Keeps accumulated float
/// error in `remaining_time` from costing an extra frame.
const MOVE_TO_EPSILON: f32 = 1e-5;

/// Input applied before a frame's physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionInput {
    /// Finger moved by `delta` pages. Positive delta moves content right,
    /// which lowers the page.
    Drag(f32),
    /// Finger lifted without a fling.
    TouchUp,
    /// Finger lifted with a velocity in pages/s, same sign as `Drag`.
    Fling(f32),
    /// Start a scripted transition to a page.
    MoveTo(f32),
    /// No new input.
    Tick,
}

/// In-flight scripted transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTo {
    pub total_time: f32,
    pub remaining_time: f32,
    pub start_page: f32,
    pub target_page: f32,
}

impl MoveTo {
    /// Linear progress through the transition, `0..=1`.
    pub fn progress(&self) -> f32 {
        if self.total_time <= 0.0 {
            return 1.0;
        }
        ((self.total_time - self.remaining_time) / self.total_time).clamp(0.0, 1.0)
    }
}

/// Current physics regime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    /// Resting on a page center.
    #[default]
    Idle,
    Dragging,
    /// Free physics with friction.
    Flinging,
    /// Gliding onto the nearest page center.
    SnappingToCenter,
    MovingTo(MoveTo),
}

impl Motion {
    pub fn name(&self) -> &'static str {
        match self {
            Motion::Idle => "idle",
            Motion::Dragging => "dragging",
            Motion::Flinging => "flinging",
            Motion::SnappingToCenter => "snapping",
            Motion::MovingTo(_) => "moving-to",
        }
    }
}

/// Position, velocity and regime of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionState {
    pub page: f32,
    /// Pages per second.
    pub velocity: f32,
    /// Number of scroll stops. Zero behaves like a single page.
    pub page_count: usize,
    pub motion: Motion,
}

impl PositionState {
    /// Last valid page center.
    pub fn max_page(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    pub fn touch_active(&self) -> bool {
        matches!(self.motion, Motion::Dragging)
    }

    pub fn move_to(&self) -> Option<&MoveTo> {
        match &self.motion {
            Motion::MovingTo(move_to) => Some(move_to),
            _ => None,
        }
    }

    /// Whether another frame is needed to make progress.
    pub fn needs_frame(&self) -> bool {
        self.velocity != 0.0 || self.page.fract() != 0.0 || self.move_to().is_some()
    }

    /// At rest on a page center with no finger down.
    pub fn is_settled(&self) -> bool {
        !self.touch_active() && !self.needs_frame()
    }
}

/// Owns the position state and advances it one frame at a time.
#[derive(Debug, Clone)]
pub struct PositionIntegrator {
    state: PositionState,
    profile: TuningProfile,
}

impl PositionIntegrator {
    /// Creates an integrator resting on page 0. Fails if `profile` does not
    /// validate, since out-of-range tuning can push the position past the
    /// overscroll band.
    pub fn new(profile: TuningProfile, page_count: usize) -> Result<Self, ConfigError> {
        profile.validate()?;
        Ok(Self {
            state: PositionState {
                page_count,
                ..PositionState::default()
            },
            profile,
        })
    }

    pub fn state(&self) -> &PositionState {
        &self.state
    }

    pub fn profile(&self) -> &TuningProfile {
        &self.profile
    }

    pub fn page(&self) -> f32 {
        self.state.page
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn motion(&self) -> Motion {
        self.state.motion
    }

    /// Updates the number of scroll stops. Positions past the new end are
    /// pulled into the overscroll band; physics brings them the rest of
    /// the way.
    pub fn set_page_count(&mut self, page_count: usize) {
        if page_count == self.state.page_count {
            return;
        }
        log::debug!("page count {} -> {page_count}", self.state.page_count);
        self.state.page_count = page_count;
        let max = self.state.max_page();
        let overscroll = if self.state.touch_active() {
            self.profile.drag_overscroll
        } else {
            self.profile.settle_overscroll
        };
        self.state.page = self.state.page.clamp(-overscroll, max + overscroll);
        if let Motion::MovingTo(move_to) = &mut self.state.motion {
            move_to.target_page = move_to.target_page.clamp(0.0, max);
        }
    }

    /// Places the carousel on `page` at rest, dropping any motion.
    pub fn reset(&mut self, page: f32) {
        let page = if page.is_finite() { page } else { 0.0 };
        self.state.page = page.clamp(0.0, self.state.max_page());
        self.state.velocity = 0.0;
        self.set_motion(Motion::Idle);
    }

    /// Applies `input`, then runs one physics step of `dt` seconds.
    pub fn advance(&mut self, dt: f32, input: PositionInput) -> &PositionState {
        self.apply(input);
        self.step(dt);
        &self.state
    }

    /// Applies an input event without advancing time.
    pub fn apply(&mut self, input: PositionInput) {
        match input {
            PositionInput::Drag(delta) => {
                if let Some(delta) = finite("drag delta", delta) {
                    self.drag(delta);
                }
            }
            PositionInput::TouchUp => self.touch_up(),
            PositionInput::Fling(velocity) => {
                if let Some(velocity) = finite("fling velocity", velocity) {
                    self.fling(velocity);
                }
            }
            PositionInput::MoveTo(page) => {
                if let Some(page) = finite("move-to page", page) {
                    self.move_to(page);
                }
            }
            PositionInput::Tick => {}
        }
    }

    /// Advances by `dt` seconds. Zero, negative and non-finite steps are
    /// ignored.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        match self.state.motion {
            Motion::Dragging => {}
            Motion::MovingTo(move_to) => self.step_move_to(move_to, dt),
            _ => self.step_free(dt),
        }
    }

    fn drag(&mut self, delta: f32) {
        let overscroll = self.profile.drag_overscroll;
        let max = self.state.max_page();
        self.state.velocity = 0.0;
        self.state.page = (self.state.page - delta).clamp(-overscroll, max + overscroll);
        self.set_motion(Motion::Dragging);
    }

    fn touch_up(&mut self) {
        if self.state.touch_active() {
            self.set_motion(Motion::Flinging);
        }
    }

    fn fling(&mut self, input_velocity: f32) {
        if self.state.move_to().is_some() {
            log::debug!("fling ignored during move-to");
            return;
        }
        let profile = &self.profile;
        let page = self.state.page;
        let max = self.state.max_page();

        let mut velocity = -input_velocity;
        // Flicks get a minimum speed so a short swipe still turns the page.
        // The minimum shrinks toward page edges, where less travel is left.
        let edge_offset = (frac(page + 0.5) - 0.5).abs();
        let min_speed = profile.min_fling_speed * (1.0 - edge_offset * profile.fling_center_scale);
        let speed = velocity.abs();
        if speed < min_speed && speed > profile.fling_trigger {
            velocity = min_speed.copysign(velocity);
        }

        // Never fling further past an edge that is already reached.
        if page <= 0.0 {
            velocity = velocity.max(0.0);
        }
        if page > max {
            velocity = velocity.min(0.0);
        }

        log::debug!("fling input={input_velocity:.3} velocity={velocity:.3} page={page:.3}");
        self.state.velocity = velocity;
        self.set_motion(Motion::Flinging);
    }

    fn move_to(&mut self, target: f32) {
        if self.state.touch_active() {
            log::debug!("move-to {target} ignored while dragging");
            return;
        }
        let target_page = target.clamp(0.0, self.state.max_page());
        let total_time = self.profile.move_to_duration;
        self.state.velocity = 0.0;
        self.set_motion(Motion::MovingTo(MoveTo {
            total_time,
            remaining_time: total_time,
            start_page: self.state.page,
            target_page,
        }));
    }

    fn step_move_to(&mut self, mut move_to: MoveTo, dt: f32) {
        move_to.remaining_time -= dt;
        if move_to.remaining_time <= MOVE_TO_EPSILON {
            self.state.page = move_to.target_page;
            self.state.velocity = 0.0;
            self.set_motion(Motion::Idle);
            return;
        }
        let eased = self.profile.move_to_easing.transform(move_to.progress());
        self.state.page =
            move_to.start_page + (move_to.target_page - move_to.start_page) * eased;
        self.state.motion = Motion::MovingTo(move_to);
    }

    fn step_free(&mut self, dt: f32) {
        let profile = &self.profile;
        let max = self.state.max_page();
        let mut page = self.state.page;
        let mut velocity = self.state.velocity;

        let norm_pos = frac(page + 0.5);
        let below = page < -0.5;
        let outside = profile.pin_outside && (below || page - max > 0.5);
        let TableSample {
            attraction,
            friction,
        } = if !outside {
            profile.table.sample(norm_pos)
        } else if below {
            profile.table.first()
        } else {
            profile.table.last()
        };
        let accel = attraction * dt;
        let friction = friction * dt;

        // Attraction may not speed up fast motion further, but always acts
        // when slow or when opposing the motion.
        if velocity.abs() < profile.accel_gate || velocity * accel < 0.0 {
            velocity += accel;
        }

        let snapping = !outside && friction > velocity.abs() && friction > accel.abs();
        if snapping {
            let offset = norm_pos - 0.5;
            if offset.abs() < friction * dt {
                page = page.round().clamp(0.0, max);
                velocity = 0.0;
            } else if offset > 0.0 {
                velocity = -friction;
            } else {
                velocity = friction;
            }
        } else if velocity > 0.0 {
            velocity = (velocity - friction).max(0.0);
        } else {
            velocity = (velocity + friction).min(0.0);
        }

        page += velocity * dt;

        let overscroll = profile.settle_overscroll;
        let k = profile.boundary_damping;
        let cap = profile.damping_cap;
        if page < 0.0 && velocity < 0.0 {
            page = page.max(-overscroll);
            velocity *= (1.0 + page * k).clamp(0.0, cap);
        }
        if page > max && velocity > 0.0 {
            page = page.min(max + overscroll);
            velocity *= (1.0 - (page - max) * k).clamp(0.0, cap);
        }
        page = page.clamp(-overscroll, max + overscroll);

        self.state.page = page;
        self.state.velocity = velocity;
        let motion = if velocity == 0.0 && page.fract() == 0.0 {
            Motion::Idle
        } else if snapping {
            Motion::SnappingToCenter
        } else {
            Motion::Flinging
        };
        self.set_motion(motion);
        log::trace!(
            "{} page={page:.4} velocity={velocity:.4} accel={accel:.4} friction={friction:.4}",
            motion.name()
        );
    }

    fn set_motion(&mut self, motion: Motion) {
        if mem::discriminant(&self.state.motion) != mem::discriminant(&motion) {
            log::debug!(
                "motion {} -> {} at page {:.3}",
                self.state.motion.name(),
                motion.name(),
                self.state.page
            );
        }
        self.state.motion = motion;
    }
}

/// Fractional part in `[0, 1)`, also for negative values.
fn frac(value: f32) -> f32 {
    value - value.floor()
}

fn finite(what: &str, value: f32) -> Option<f32> {
    if value.is_finite() {
        Some(value)
    } else {
        log::warn!("ignoring non-finite {what}: {value}");
        None
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
