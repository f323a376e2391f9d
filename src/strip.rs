//! Buffered pixel strip with deferred hardware output.
//!
//! Writes accumulate in an in-memory frame buffer; nothing reaches the
//! hardware until [`Strip::flush`] pushes the whole buffer through an
//! [`OutputDriver`](crate::OutputDriver) once per tick. Global brightness
//! is a flush-time multiplier, so fades read back uncorrected colors.

use crate::OutputDriver;
use crate::color::Rgb;
use crate::math8::scale8;

/// Frame buffer for N physical pixels
#[derive(Debug, Clone)]
pub struct Strip<const N: usize> {
    pixels: [Rgb; N],
    brightness: u8,
}

impl<const N: usize> Strip<N> {
    /// Create a new strip, dark, at the given global brightness
    pub const fn new(brightness: u8) -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
            brightness,
        }
    }

    /// Buffer a color for one physical pixel
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        debug_assert!(index < N);
        self.pixels[index] = color;
    }

    /// Read back the buffered color of one physical pixel
    ///
    /// Fade starts read this so a transition begins from whatever the
    /// pixel currently displays rather than a hardcoded value.
    pub fn pixel(&self, index: usize) -> Rgb {
        debug_assert!(index < N);
        self.pixels[index]
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    /// Set the global brightness multiplier (0-255), effective next flush
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Current global brightness multiplier
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// The raw (brightness-uncorrected) frame buffer
    pub fn frame(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Push the buffer to hardware, scaled by the global brightness
    ///
    /// Call exactly once per main-loop iteration, after all channel
    /// updates for that tick have run.
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        if self.brightness == 255 {
            driver.write(&self.pixels);
            return;
        }

        let mut scaled = self.pixels;
        for pixel in &mut scaled {
            pixel.r = scale8(pixel.r, self.brightness);
            pixel.g = scale8(pixel.g, self.brightness);
            pixel.b = scale8(pixel.b, self.brightness);
        }
        driver.write(&scaled);
    }
}
