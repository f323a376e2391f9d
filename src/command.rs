//! External command input.
//!
//! A request handler (HTTP, serial, whatever the platform offers) parses
//! its argument into a [`Command`] and pushes it onto a bounded
//! [`CommandChannel`]. The engine drains the queue at the top of each
//! tick, so multi-channel mutations never interleave with the pool scan.
//!
//! The channel is a fixed-size `heapless::Deque` behind a
//! `critical-section` mutex, safe to feed from an interrupt or a second
//! context on embedded targets.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::{Rgb, rgb_from_u32};
use crate::mode::ModeId;

/// Operations an external handler can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fade the entire matrix to an explicit color
    SetColor(Rgb),
    /// Fade the matrix to a random hue with a per-row darkening gradient
    RandomColor,
    /// Stop the sweep drivers, fade to black, return to idle
    Off,
    /// Set the global brightness multiplier, immediately
    SetBrightness(u8),
    /// Force brightness to maximum and fade to white
    FullSteam,
    /// Switch to a sweep mode
    SetMode(ModeId),
}

impl Command {
    /// Parse one wire-format command argument
    ///
    /// Recognized forms: `color=<rrggbb>`, `randomcolor`, `off`,
    /// `brightness=<0-255>`, `fullsteam`, `mode=<GYRO|VERTICAL>`.
    /// Anything else yields `None` and must produce no state change.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some((name, value)) = input.split_once('=') {
            return match name {
                "color" => parse_hex_color(value).map(Self::SetColor),
                "brightness" => value.parse::<u8>().ok().map(Self::SetBrightness),
                "mode" => match ModeId::parse_from_str(value) {
                    Some(mode) if mode.has_driver() => Some(Self::SetMode(mode)),
                    _ => None,
                },
                _ => None,
            };
        }

        match input {
            "randomcolor" => Some(Self::RandomColor),
            "off" => Some(Self::Off),
            "fullsteam" => Some(Self::FullSteam),
            _ => None,
        }
    }
}

/// Parse a 6-digit hex color, with or without a leading `#`
fn parse_hex_color(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub Command);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe command queue
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Try to send a command into the channel.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to receive a command from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to send a command into the channel.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// A receiver handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Try to receive a command from the channel.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }
}
