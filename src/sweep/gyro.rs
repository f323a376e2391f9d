use crate::color::{BLACK, Rgb, random_hue};
use crate::rng::Rng;
use crate::sweep::SWEEP_LIGHTNESS;

/// Result of advancing the gyro sweep by one driver tick
#[derive(Debug, Clone, Copy)]
pub struct GyroStep {
    /// Column the front pixel moved to
    pub column: u16,
    /// Color to fade the new front column from
    pub color: Rgb,
    /// Whether the front pixel wrapped and a fresh hue was drawn
    pub new_cycle: bool,
}

/// Front-pixel tracker for the gyro comet sweep
#[derive(Debug, Clone)]
pub struct GyroSweep {
    front_pixel: u16,
    front_color: Rgb,
}

impl GyroSweep {
    pub const fn new() -> Self {
        Self {
            front_pixel: 0,
            front_color: BLACK,
        }
    }

    /// Current front pixel column
    pub const fn front_pixel(&self) -> u16 {
        self.front_pixel
    }

    /// Seed the sweep color, used when the mode starts so the first lap
    /// is not invisible
    pub fn set_color(&mut self, color: Rgb) {
        self.front_color = color;
    }

    /// Move the front pixel one column forward
    ///
    /// Wraps modulo `pixels_per_row`; a fresh random hue is drawn exactly
    /// once per wrap, not on every tick.
    pub fn advance(&mut self, pixels_per_row: u16, rng: &mut Rng) -> GyroStep {
        self.front_pixel = (self.front_pixel + 1) % pixels_per_row;
        let new_cycle = self.front_pixel == 0;
        if new_cycle {
            self.front_color = random_hue(rng, SWEEP_LIGHTNESS);
        }

        GyroStep {
            column: self.front_pixel,
            color: self.front_color,
            new_cycle,
        }
    }

    /// Reset the front pixel to its initial position
    pub fn reset(&mut self) {
        self.front_pixel = 0;
    }
}

impl Default for GyroSweep {
    fn default() -> Self {
        Self::new()
    }
}
