//! Perceptual gamma correction for fade animations.
//!
//! Linear blends look washed out near the dark end of a fade; correcting
//! with a power curve keeps the tail of a sweep visually smooth.

use crate::color::Rgb;

const GAMMA: f32 = 2.2;

/// Apply perceptual gamma correction to a single channel value
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma8(value: u8) -> u8 {
    if value == 0 || value == 255 {
        return value;
    }

    let normalized = f32::from(value) / 255.0;
    (libm::powf(normalized, GAMMA) * 255.0 + 0.5) as u8
}

/// Gamma-correct all three channels of a color
pub fn correct(color: Rgb) -> Rgb {
    Rgb {
        r: gamma8(color.r),
        g: gamma8(color.g),
        b: gamma8(color.b),
    }
}
