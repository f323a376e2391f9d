use crate::color::{BLACK, Rgb, random_hue};
use crate::rng::Rng;
use crate::sweep::SWEEP_LIGHTNESS;

/// Result of advancing the vertical sweep by one driver tick
#[derive(Debug, Clone, Copy)]
pub struct VerticalStep {
    /// Row the front of the band moved to
    pub row: u16,
    /// Color of the front row
    pub color: Rgb,
    /// Whether the front row wrapped and a fresh hue was drawn
    pub new_cycle: bool,
}

/// Front-row tracker for the rising band sweep
#[derive(Debug, Clone)]
pub struct VerticalSweep {
    front_row: u16,
    row_color: Rgb,
}

impl VerticalSweep {
    pub const fn new() -> Self {
        Self {
            front_row: 0,
            row_color: BLACK,
        }
    }

    /// Current front row
    pub const fn front_row(&self) -> u16 {
        self.front_row
    }

    /// Seed the band color, used when the mode starts
    pub fn set_color(&mut self, color: Rgb) {
        self.row_color = color;
    }

    /// Move the band one row up
    ///
    /// Wraps modulo `row_count`; a fresh random hue is drawn exactly once
    /// per wrap.
    pub fn advance(&mut self, row_count: u16, rng: &mut Rng) -> VerticalStep {
        self.front_row = (self.front_row + 1) % row_count;
        let new_cycle = self.front_row == 0;
        if new_cycle {
            self.row_color = random_hue(rng, SWEEP_LIGHTNESS);
        }

        VerticalStep {
            row: self.front_row,
            color: self.row_color,
            new_cycle,
        }
    }

    /// Reset the front row to its initial position
    pub fn reset(&mut self) {
        self.front_row = 0;
    }
}

impl Default for VerticalSweep {
    fn default() -> Self {
        Self::new()
    }
}

/// Row preceding `row` with wrap-around
pub(crate) const fn previous_row(row: u16, row_count: u16) -> u16 {
    if row == 0 { row_count - 1 } else { row - 1 }
}
