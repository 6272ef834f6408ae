//! Frame driver for the Rollo carousel.
//!
//! [`Carousel`] owns the integrators, input tracking and frame timing. The
//! host feeds it [`CarouselEvent`]s as they arrive and calls
//! [`Carousel::frame`] from its render loop for as long as that returns
//! `true`.

mod renderer;

pub use renderer::{FrameParams, HeadlessRenderer, Renderer};

use rollo_animation::{
    PositionInput, PositionIntegrator, PositionState, TuningProfile, ZoomIntegrator,
};
use rollo_core::{ConfigError, FrameTiming, ReadbackPublisher, ReadbackSink, ReadbackSnapshot};
use rollo_foundation::{GridLayout, Orientation, TouchTracker};

/// Input from the host UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Pointer position and whether the finger is down.
    Touch { x: f32, down: bool },
    /// Finger lifted with a velocity in pointer units per second.
    Fling { velocity: f32 },
    /// Scroll to a page with the scripted transition.
    MoveTo { page: f32 },
    /// Show (1) or hide (0) the carousel, animated or at once.
    SetZoom { target: f32, animate: bool },
    SetIconCount(usize),
    SetViewport { width: f32, height: f32 },
}

pub struct Carousel<S>
where
    S: ReadbackSink,
{
    position: PositionIntegrator,
    zoom: ZoomIntegrator,
    touch: TouchTracker,
    layout: GridLayout,
    orientation: Orientation,
    icon_count: usize,
    timing: FrameTiming,
    readback: ReadbackPublisher<S>,
    /// Draw the next frame even when hidden, and request one after it.
    warm_up: bool,
}

impl<S> Carousel<S>
where
    S: ReadbackSink,
{
    pub fn new(profile: TuningProfile, layout: GridLayout, sink: S) -> Result<Self, ConfigError> {
        let orientation = Orientation::default();
        let page_count = layout.page_count(orientation, 0);
        let zoom = ZoomIntegrator::new(profile.zoom);
        let touch = TouchTracker::new(profile.input);
        let position = PositionIntegrator::new(profile, page_count).map_err(|err| {
            log::warn!("rejected tuning profile: {err}");
            err
        })?;
        Ok(Self {
            position,
            zoom,
            touch,
            layout,
            orientation,
            icon_count: 0,
            timing: FrameTiming::new(),
            readback: ReadbackPublisher::new(sink),
            warm_up: true,
        })
    }

    /// Applies one host event. Takes effect on the next frame.
    pub fn handle(&mut self, event: CarouselEvent) {
        log::debug!("event {event:?}");
        match event {
            CarouselEvent::Touch { x, down } => {
                for input in self.touch.update(x, down) {
                    self.position.apply(input);
                }
            }
            CarouselEvent::Fling { velocity } => {
                let input = self.touch.fling(velocity);
                self.position.apply(input);
            }
            CarouselEvent::MoveTo { page } => self.position.apply(PositionInput::MoveTo(page)),
            CarouselEvent::SetZoom { target, animate } => self.set_zoom(target, animate),
            CarouselEvent::SetIconCount(count) => {
                self.icon_count = count;
                self.refresh_page_count();
            }
            CarouselEvent::SetViewport { width, height } => {
                self.orientation = Orientation::from_viewport(width, height);
                self.refresh_page_count();
            }
        }
    }

    /// Changes the zoom target. Without animation zoom jumps straight there,
    /// the new value is reported at once and the next frame steps with the
    /// measured interval.
    pub fn set_zoom(&mut self, target: f32, animate: bool) {
        if animate {
            self.zoom.set_target(target);
        } else {
            self.zoom.set(target);
            self.timing.mark_drawn();
            self.publish();
        }
    }

    /// Requests a warm-up frame: the next frame is drawn even while hidden
    /// and asks for a successor.
    pub fn reset_warm_up(&mut self) {
        self.warm_up = true;
    }

    /// Runs one frame at `now_ms` and returns whether another is needed.
    pub fn frame<R>(&mut self, now_ms: u64, renderer: &mut R) -> bool
    where
        R: Renderer + ?Sized,
    {
        let dt = self.timing.begin_frame(now_ms);

        if self.zoom.step(dt) {
            self.publish();
        }

        if self.zoom.is_hidden() && !self.warm_up {
            // Closed carousels reopen on the first page.
            if !self.position.state().touch_active() {
                self.position.reset(0.0);
            }
            self.publish();
            return self.timing.finish_frame(false);
        }

        self.refresh_page_count();
        self.position.step(dt);
        self.publish();

        let state = *self.position.state();
        let grid = self.layout.grid(self.orientation);
        renderer.render(&FrameParams {
            page: state.page,
            velocity: state.velocity,
            zoom: self.zoom.zoom(),
            animation: self.zoom.animation(),
            grid,
            page_count: state.page_count,
            icon_count: self.icon_count,
            warm_up: self.warm_up,
        });

        if self.warm_up {
            log::debug!("warm-up frame drawn");
            self.warm_up = false;
            self.timing.finish_frame(true);
            return true;
        }

        let draw = state.needs_frame() || !self.zoom.is_settled();
        self.timing.finish_frame(draw)
    }

    /// Whether anything is still in motion. The loop also runs one trailing
    /// frame after this turns false.
    pub fn needs_frame(&self) -> bool {
        self.warm_up || self.position.state().needs_frame() || !self.zoom.is_settled()
    }

    pub fn position(&self) -> &PositionState {
        self.position.state()
    }

    pub fn zoom(&self) -> &ZoomIntegrator {
        &self.zoom
    }

    pub fn profile(&self) -> &TuningProfile {
        self.position.profile()
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn icon_count(&self) -> usize {
        self.icon_count
    }

    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    pub fn readback(&self) -> &ReadbackPublisher<S> {
        &self.readback
    }

    fn refresh_page_count(&mut self) {
        let page_count = self.layout.page_count(self.orientation, self.icon_count);
        self.position.set_page_count(page_count);
    }

    fn publish(&mut self) {
        let state = self.position.state();
        self.readback.publish(ReadbackSnapshot::new(
            state.page,
            state.velocity,
            self.zoom.zoom(),
        ));
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
