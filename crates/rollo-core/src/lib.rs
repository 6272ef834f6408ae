//! Core plumbing shared by the Rollo carousel crates.
//!
//! Frame timing bookkeeping and the readback channel that reports position
//! and zoom to the host. The configuration error type lives here too.

pub mod frame_clock;
pub mod readback;

pub use frame_clock::{
    FrameTiming, ManualClock, MonotonicClock, SystemClock, IDLE_FRAME_DT, MAX_FRAME_DT,
};
pub use readback::{
    LatestReadback, ReadbackPublisher, ReadbackSink, ReadbackSnapshot, FIXED_POINT_ONE,
};

/// Rejected configuration value.
///
/// Runtime input is never an error (it is clamped or ignored); only the
/// tuning profile, physics tables and grid layout can be invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A physics table needs at least two usable samples.
    TableTooShort { len: usize },
    /// Attraction and friction tables must have the same number of samples.
    TableLengthMismatch { attraction: usize, friction: usize },
    /// A value that must be finite was NaN or infinite.
    NonFinite { field: &'static str },
    /// A value fell outside its allowed range.
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// Grid columns and rows must be non-zero.
    EmptyGrid { columns: usize, rows: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TableTooShort { len } => {
                write!(f, "physics table has {len} samples; at least 2 required")
            }
            ConfigError::TableLengthMismatch {
                attraction,
                friction,
            } => write!(
                f,
                "attraction table has {attraction} samples but friction table has {friction}"
            ),
            ConfigError::NonFinite { field } => write!(f, "{field} must be finite"),
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} outside [{min}, {max}]"),
            ConfigError::EmptyGrid { columns, rows } => {
                write!(f, "grid {columns}x{rows} has no cells")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks that `value` is finite and within `[min, max]`.
pub fn check_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
