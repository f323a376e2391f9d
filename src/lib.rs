#![no_std]

pub mod color;
pub mod command;
pub mod engine;
pub mod frame_scheduler;
pub mod gamma;
pub mod geometry;
pub mod math8;
pub mod mode;
pub mod pool;
pub mod rng;
pub mod strip;
pub mod sweep;

pub use color::Rgb;
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use engine::{AnimatorConfig, MatrixAnimator, SweepTimings};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::MatrixGeometry;
pub use mode::ModeId;
pub use pool::{Animation, AnimationPool, DRIVER_CHANNELS};
pub use strip::Strip;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animator is generic over this trait; timing and DMA details live
/// behind it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
