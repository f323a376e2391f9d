mod utils;

use smart_leds::RGB8;

pub use utils::{blend_colors, darken, hsl_to_rgb, random_hue, rgb_from_u32};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full intensity
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
