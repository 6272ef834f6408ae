//! Easing curves for scripted move-to transitions.

use std::f32::consts::PI;

/// Maps linear progress in `[0, 1]` onto an eased progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Half-cosine S-curve: zero slope at both ends.
    #[default]
    CosineInOut,
}

impl Easing {
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::CosineInOut => ease_in_out_cosine(fraction),
        }
    }
}

/// `cos((x + 1)π) / 2 + 0.5`, pinned to exact endpoints.
pub fn ease_in_out_cosine(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    ((x + 1.0) * PI).cos() * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_endpoints_are_exact() {
        assert_eq!(ease_in_out_cosine(0.0), 0.0);
        assert_eq!(ease_in_out_cosine(1.0), 1.0);
        assert!((ease_in_out_cosine(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn cosine_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let value = Easing::CosineInOut.transform(i as f32 / 100.0);
            assert!(value >= prev, "easing decreased at step {i}");
            prev = value;
        }
    }

    #[test]
    fn cosine_is_flat_at_the_ends() {
        let start_slope = ease_in_out_cosine(0.01) / 0.01;
        let end_slope = (1.0 - ease_in_out_cosine(0.99)) / 0.01;
        assert!(start_slope < 0.05);
        assert!(end_slope < 0.05);
    }

    #[test]
    fn transform_clamps_input() {
        assert_eq!(Easing::Linear.transform(-1.0), 0.0);
        assert_eq!(Easing::Linear.transform(2.0), 1.0);
    }
}
