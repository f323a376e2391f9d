//! Fixed-capacity animation channel pool.
//!
//! Each channel is one in-flight timed transition. Progress is always
//! computed from the absolute elapsed time against the channel's start
//! timestamp, so a long-blocked tick makes transitions catch up in one
//! jump instead of drifting.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;

/// Number of low pool slots reserved for mode driver timers
///
/// These slots are never handed out by [`AnimationPool::find_available`];
/// they are armed explicitly by index when a mode starts.
pub const DRIVER_CHANNELS: usize = 2;

/// Payload of one animation channel
///
/// Dispatch is by variant, each carrying its own state, so a channel is
/// self-describing and no parallel state array is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Fade a single physical pixel between two colors, eased
    PixelFade {
        from: Rgb,
        to: Rgb,
        /// Physical pixel index being animated
        pixel: u16,
    },
    /// Fade one logical column across every row (the gyro trail)
    ColumnFade {
        from: Rgb,
        to: Rgb,
        /// Logical column index being animated
        column: u16,
    },
    /// Periodic timer driving the gyro sweep; draws nothing itself
    GyroTick,
    /// Periodic timer driving the vertical sweep; draws nothing itself
    VerticalTick,
}

/// One occupied channel slot
#[derive(Debug, Clone, Copy)]
pub struct ActiveChannel {
    start_time: Instant,
    duration: Duration,
    animation: Animation,
}

impl ActiveChannel {
    /// The channel's animation payload
    pub const fn animation(&self) -> Animation {
        self.animation
    }

    /// Elapsed fraction of the channel's duration (0-255)
    ///
    /// Reports exactly 255 once complete, including for zero-duration
    /// channels, so completion and full progress always coincide.
    pub fn progress(&self, now: Instant) -> u8 {
        if self.is_complete(now) {
            return 255;
        }
        crate::math8::progress8(now.duration_since(self.start_time), self.duration)
    }

    /// Whether the channel's duration has fully elapsed
    pub fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.start_time) >= self.duration
    }
}

/// Fixed-size pool of animation channels
///
/// N is the total channel capacity, including the reserved driver slots.
/// Slots are iterated in ascending index order by the engine, which makes
/// draw order for overlapping writes stable and reproducible.
#[derive(Debug)]
pub struct AnimationPool<const N: usize> {
    slots: [Option<ActiveChannel>; N],
}

impl<const N: usize> AnimationPool<N> {
    /// Create a new pool with every slot free
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
        }
    }

    /// First free non-reserved slot, requiring at least `count` free
    ///
    /// Returns `None` when fewer than `count` non-reserved slots are free.
    /// Allocation failure is non-fatal by design: callers skip the visual
    /// update for this tick and try again on the next one.
    pub fn find_available(&self, count: usize) -> Option<usize> {
        if self.free_slots() < count {
            return None;
        }
        self.slots
            .iter()
            .enumerate()
            .skip(DRIVER_CHANNELS)
            .find(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
    }

    /// Number of free non-reserved slots
    pub fn free_slots(&self) -> usize {
        self.slots
            .iter()
            .skip(DRIVER_CHANNELS)
            .filter(|slot| slot.is_none())
            .count()
    }

    /// Arm a slot with an animation
    ///
    /// A zero `duration` is a degenerate case that completes on the very
    /// next advance. Starting over an occupied slot abandons whatever was
    /// running there.
    pub fn start(&mut self, index: usize, duration: Duration, animation: Animation, now: Instant) {
        self.slots[index] = Some(ActiveChannel {
            start_time: now,
            duration,
            animation,
        });
    }

    /// Free a slot immediately, regardless of progress
    ///
    /// The only cancellation primitive. A half-finished transition is
    /// abandoned; the buffer keeps whatever was last written.
    pub fn stop(&mut self, index: usize) {
        self.slots[index] = None;
    }

    /// Re-arm a slot in place, preserving its payload and duration
    ///
    /// Progress restarts from zero at `now`. Used by driver timers to turn
    /// a one-shot channel into a periodic tick source. No effect on a free
    /// slot.
    pub fn restart(&mut self, index: usize, now: Instant) {
        if let Some(channel) = self.slots[index].as_mut() {
            channel.start_time = now;
        }
    }

    /// Whether a slot is occupied
    pub const fn is_active(&self, index: usize) -> bool {
        self.slots[index].is_some()
    }

    /// Whether every slot is free
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The animation payload of an occupied slot
    pub fn animation(&self, index: usize) -> Option<Animation> {
        self.slots[index].map(|channel| channel.animation)
    }

    /// Snapshot an occupied slot: payload, progress and completion
    pub fn sample(&self, index: usize, now: Instant) -> Option<(Animation, u8, bool)> {
        self.slots[index]
            .map(|channel| (channel.animation, channel.progress(now), channel.is_complete(now)))
    }
}

impl<const N: usize> Default for AnimationPool<N> {
    fn default() -> Self {
        Self::new()
    }
}
