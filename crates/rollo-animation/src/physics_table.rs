//! Attraction and friction lookup tables.
//!
//! Both tables are sampled across one page cell: index 0 is the left edge,
//! the middle is the page center and the last usable sample is the right
//! edge. Attraction is positive on the left half and negative on the right,
//! pulling toward the center.

use rollo_core::ConfigError;
use smallvec::SmallVec;

/// Inline capacity covers the shipped tables (8 usable samples + padding).
const INLINE_SAMPLES: usize = 9;

type Samples = SmallVec<[f32; INLINE_SAMPLES]>;

/// Interpolated physics values at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSample {
    /// Acceleration toward the page center, in pages/s².
    pub attraction: f32,
    /// Velocity loss per second, in pages/s².
    pub friction: f32,
}

/// Immutable pair of attraction/friction curves.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsTable {
    attraction: Samples,
    friction: Samples,
    span: usize,
}

impl PhysicsTable {
    /// Builds a table from `n >= 2` usable samples per curve.
    ///
    /// The last sample is duplicated internally so a normalized position of
    /// exactly 1.0 still has an upper neighbour to interpolate against.
    pub fn new(attraction: &[f32], friction: &[f32]) -> Result<Self, ConfigError> {
        if attraction.len() != friction.len() {
            return Err(ConfigError::TableLengthMismatch {
                attraction: attraction.len(),
                friction: friction.len(),
            });
        }
        if attraction.len() < 2 {
            return Err(ConfigError::TableTooShort {
                len: attraction.len(),
            });
        }
        if attraction.iter().chain(friction).any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: "physics table",
            });
        }
        if friction.iter().any(|v| *v < 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "physics table friction",
                value: friction.iter().copied().fold(f32::INFINITY, f32::min),
                min: 0.0,
                max: f32::MAX,
            });
        }

        Ok(Self::from_samples(attraction, friction))
    }

    /// Builds one of the built-in tables.
    pub(crate) fn preset<const N: usize>(attraction: [f32; N], friction: [f32; N]) -> Self {
        debug_assert!(N >= 2, "preset tables need two samples");
        Self::from_samples(&attraction, &friction)
    }

    fn from_samples(attraction: &[f32], friction: &[f32]) -> Self {
        let span = attraction.len() - 1;
        let mut a: Samples = attraction.iter().copied().collect();
        let mut f: Samples = friction.iter().copied().collect();
        a.push(attraction[span]);
        f.push(friction[span]);
        Self {
            attraction: a,
            friction: f,
            span,
        }
    }

    /// Number of intervals between usable samples.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Linearly interpolates both curves at `norm_pos` in `[0, 1]`.
    pub fn sample(&self, norm_pos: f32) -> TableSample {
        let index_f = norm_pos.clamp(0.0, 1.0) * self.span as f32;
        // Truncation is a floor here; index_f is never negative.
        let index = (index_f as usize).min(self.span);
        let frac = index_f - index as f32;
        TableSample {
            attraction: lerp(self.attraction[index], self.attraction[index + 1], frac),
            friction: lerp(self.friction[index], self.friction[index + 1], frac),
        }
    }

    /// Values at the left edge, used for positions far below the first page.
    pub fn first(&self) -> TableSample {
        TableSample {
            attraction: self.attraction[0],
            friction: self.friction[0],
        }
    }

    /// Values at the right edge, used for positions far past the last page.
    pub fn last(&self) -> TableSample {
        TableSample {
            attraction: self.attraction[self.span],
            friction: self.friction[self.span],
        }
    }

    pub fn attraction(&self) -> &[f32] {
        &self.attraction[..=self.span]
    }

    pub fn friction(&self) -> &[f32] {
        &self.friction[..=self.span]
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
