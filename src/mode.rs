//! Lighting mode identifiers.
//!
//! Exactly one mode is active at a time. The set is closed and known at
//! compile time; the engine switches on the variant once per command
//! instead of comparing status strings in the tick loop.

const MODE_NAME_BOOT: &str = "BOOT";
const MODE_NAME_IDLE: &str = "IDLE";
const MODE_NAME_GYRO: &str = "GYRO";
const MODE_NAME_VERTICAL: &str = "VERTICAL";

const MODE_ID_BOOT: u8 = 0;
const MODE_ID_IDLE: u8 = 1;
const MODE_ID_GYRO: u8 = 2;
const MODE_ID_VERTICAL: u8 = 3;

/// Known lighting modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    /// Startup; hands over to `Idle` once the boot fade finishes
    Boot = MODE_ID_BOOT,
    /// Ambient, no continuous sweep driver running
    Idle = MODE_ID_IDLE,
    /// Single-pixel comet sweeping each row's columns with a fading trail
    Gyro = MODE_ID_GYRO,
    /// Colored band rising row by row with a darkening tail
    Vertical = MODE_ID_VERTICAL,
}

impl ModeId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_BOOT => Self::Boot,
            MODE_ID_IDLE => Self::Idle,
            MODE_ID_GYRO => Self::Gyro,
            MODE_ID_VERTICAL => Self::Vertical,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boot => MODE_NAME_BOOT,
            Self::Idle => MODE_NAME_IDLE,
            Self::Gyro => MODE_NAME_GYRO,
            Self::Vertical => MODE_NAME_VERTICAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_BOOT => Some(Self::Boot),
            MODE_NAME_IDLE => Some(Self::Idle),
            MODE_NAME_GYRO => Some(Self::Gyro),
            MODE_NAME_VERTICAL => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Whether the mode runs a continuous driver timer
    pub const fn has_driver(self) -> bool {
        matches!(self, Self::Gyro | Self::Vertical)
    }
}
