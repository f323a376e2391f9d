//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::engine::MatrixAnimator;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Advances the animator and flushes to the output driver exactly once per
/// frame, tracks frame timing with drift correction, and returns timing
/// info so the caller can sleep appropriately.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(animator, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const PIXELS: usize,
    const CHANNELS: usize,
    const COMMANDS: usize,
> {
    output: O,
    animator: MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const PIXELS: usize, const CHANNELS: usize, const COMMANDS: usize>
    FrameScheduler<'a, O, PIXELS, CHANNELS, COMMANDS>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(animator: MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS>, driver: O) -> Self {
        Self::with_frame_duration(animator, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        animator: MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            animator,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Applies drift correction (more than two frames behind resets the
    /// schedule to `now` instead of bursting through the backlog), ticks
    /// the animator, flushes to the output driver, and returns the
    /// deadline for the next frame.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.animator.tick(now);
        self.animator.flush(&mut self.output);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the animator.
    pub fn animator(&self) -> &MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS> {
        &self.animator
    }

    /// Get a mutable reference to the animator.
    pub fn animator_mut(&mut self) -> &mut MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS> {
        &mut self.animator
    }
}
