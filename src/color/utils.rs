use crate::{
    color::Rgb,
    math8::{blend8, scale8},
    rng::Rng,
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Reduce each channel proportionally
///
/// `amount` 0 leaves the color untouched, 255 yields black. Used to build
/// the vertical sweep's darkening tail without going through the pool.
#[inline]
pub const fn darken(color: Rgb, amount: u8) -> Rgb {
    let keep = 255 - amount;
    Rgb {
        r: scale8(color.r, keep),
        g: scale8(color.g, keep),
        b: scale8(color.b, keep),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert HSL to RGB
///
/// Hue, saturation and lightness are all in [0, 1]; hue wraps. Sweep hues
/// come from here with full saturation and mid lightness, which produces
/// pure spectral colors.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let hue = hue - libm::floorf(hue);
    let chroma = (1.0 - libm::fabsf(2.0 * lightness - 1.0)) * saturation;
    let sector = hue * 6.0;
    let x = chroma * (1.0 - libm::fabsf(libm::fmodf(sector, 2.0) - 1.0));

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    Rgb {
        r: ((r + m) * 255.0 + 0.5) as u8,
        g: ((g + m) * 255.0 + 0.5) as u8,
        b: ((b + m) * 255.0 + 0.5) as u8,
    }
}

/// Pick a fully saturated random hue at the given lightness
#[allow(clippy::cast_precision_loss)]
pub fn random_hue(rng: &mut Rng, lightness: f32) -> Rgb {
    let degrees = rng.next_below(360);
    hsl_to_rgb(degrees as f32 / 360.0, 1.0, lightness)
}
