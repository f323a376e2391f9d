//! Sweep position counters for the continuous modes.
//!
//! A sweep struct owns the "front" position and current hue of one mode's
//! animation and advances them once per driver tick. It draws nothing
//! itself; the engine turns each step into channel allocations or direct
//! buffer writes. Keeping the counters here removes the file-level global
//! state the pattern is usually built on.

mod gyro;
mod vertical;

pub use gyro::{GyroStep, GyroSweep};
pub use vertical::{VerticalStep, VerticalSweep};
pub(crate) use vertical::previous_row;

/// Lightness used for randomly drawn sweep hues
pub(crate) const SWEEP_LIGHTNESS: f32 = 0.5;
