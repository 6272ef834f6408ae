//! Frame timing for the carousel render loop.
//!
//! The loop is reactive: it only runs while something is moving. When it
//! goes idle the wall-clock gap to the next frame says nothing about how
//! far the physics should advance, so the first frame after an idle period
//! assumes a 30 fps step instead.

use std::cell::Cell;
use web_time::Instant;

/// Largest step the integrators are ever asked to take, in seconds.
pub const MAX_FRAME_DT: f32 = 0.2;

/// Step assumed for the first frame after the loop stopped drawing.
pub const IDLE_FRAME_DT: f32 = 0.033;

/// Source of monotonic milliseconds.
pub trait MonotonicClock {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by [`web_time::Instant`], usable on native and WASM.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and scripted simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Cell::new(start_millis),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl MonotonicClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Per-frame delta time bookkeeping.
///
/// Call [`begin_frame`](Self::begin_frame) at the top of each frame and
/// [`finish_frame`](Self::finish_frame) with whether the frame wants a
/// successor.
#[derive(Debug, Clone, Default)]
pub struct FrameTiming {
    last_timestamp_ms: Option<u64>,
    dt: f32,
    drew_last_frame: bool,
}

impl FrameTiming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the step for the frame starting at `now_ms`.
    pub fn begin_frame(&mut self, now_ms: u64) -> f32 {
        let elapsed_ms = match self.last_timestamp_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_timestamp_ms = Some(now_ms);

        let mut dt = elapsed_ms as f32 * 0.001;
        if !self.drew_last_frame {
            dt = IDLE_FRAME_DT;
        }
        self.dt = dt.min(MAX_FRAME_DT);
        log::trace!("frame dt={:.4} (elapsed {elapsed_ms}ms)", self.dt);
        self.dt
    }

    /// Records whether this frame wants another one and returns whether the
    /// loop should keep running.
    ///
    /// The result also includes the previous frame's request, so one extra
    /// trailing frame is always produced after motion stops. Some display
    /// pipelines drop the final posted frame otherwise.
    pub fn finish_frame(&mut self, draw: bool) -> bool {
        let keep_running = self.drew_last_frame || draw;
        self.drew_last_frame = draw;
        keep_running
    }

    /// Marks the previous frame as drawn so the next `begin_frame` trusts
    /// the measured interval. Used when an external change (such as a
    /// non-animated zoom jump) restarts the loop.
    pub fn mark_drawn(&mut self) {
        self.drew_last_frame = true;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn drew_last_frame(&self) -> bool {
        self.drew_last_frame
    }

    pub fn last_timestamp_ms(&self) -> Option<u64> {
        self.last_timestamp_ms
    }
}
