//! Physics for the Rollo carousel
//!
//! This crate provides the page position and zoom integrators together with
//! the tuning data that shapes them.

pub mod easing;
pub mod physics_table;
pub mod position;
pub mod profile;
pub mod zoom;

pub use easing::{ease_in_out_cosine, Easing};
pub use physics_table::{PhysicsTable, TableSample};
pub use position::{Motion, MoveTo, PositionInput, PositionIntegrator, PositionState};
pub use profile::{InputScale, TuningProfile, MAX_OVERSCROLL, MAX_UNPINNED_OVERSCROLL};
pub use zoom::{ZoomCurve, ZoomIntegrator, ZoomState, HIDDEN_ZOOM};

pub mod prelude {
    pub use crate::position::{PositionInput, PositionIntegrator};
    pub use crate::profile::TuningProfile;
    pub use crate::zoom::{ZoomCurve, ZoomIntegrator};
}
