//! Rendering seam.
//!
//! The carousel does not draw. Once per frame it hands the simulated values
//! and the grid in use to a [`Renderer`], which owns all geometry and GPU
//! work.

use rollo_foundation::GridSize;

/// Everything a renderer needs to place icons for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Continuous page position; integers are page centers.
    pub page: f32,
    /// Pages per second.
    pub velocity: f32,
    /// 0 hidden, 1 fully shown.
    pub zoom: f32,
    /// `(1 - zoom)^3`, for sliding chrome in while opening.
    pub animation: f32,
    pub grid: GridSize,
    pub page_count: usize,
    pub icon_count: usize,
    /// Set on the first frame after start or [`reset_warm_up`], which is
    /// drawn even while hidden.
    ///
    /// [`reset_warm_up`]: crate::Carousel::reset_warm_up
    pub warm_up: bool,
}

pub trait Renderer {
    fn render(&mut self, params: &FrameParams);
}

impl<F> Renderer for F
where
    F: FnMut(&FrameParams),
{
    fn render(&mut self, params: &FrameParams) {
        self(params)
    }
}

/// Renderer that draws nothing and remembers what it was asked to draw.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last: Option<FrameParams>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last(&self) -> Option<&FrameParams> {
        self.last.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, params: &FrameParams) {
        self.frames += 1;
        self.last = Some(*params);
    }
}
