//! Render surfaces the engine draws into
//!
//! A surface stages pixel colors and a global brightness; nothing reaches
//! the hardware until [`RenderSurface::flush`].

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::brightness::Brightness;
use crate::color::{BLACK, Rgbw};
use crate::error::CapacityError;
use crate::math8::scale_rgbw;

/// Abstract render surface
///
/// Implement this trait to support different hardware platforms.
/// The light engine is generic over this trait.
pub trait RenderSurface {
    /// Error returned by the hardware on flush
    type Error;

    /// Number of pixel slots
    fn pixel_count(&self) -> usize;

    /// Stage a color at a slot
    fn set_pixel(&mut self, index: usize, color: Rgbw);

    /// Stage the global brightness
    fn set_brightness(&mut self, brightness: Brightness);

    /// Stage the same color into every slot
    fn fill(&mut self, color: Rgbw) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }

    /// Push staged pixels and brightness to the hardware
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Surface over a `smart-leds` driver
///
/// Pixels are staged in a fixed-capacity buffer. On flush every channel is
/// scaled by the staged brightness and the frame is written to the driver.
pub struct StripSurface<W, const MAX_LEDS: usize> {
    writer: W,
    pixels: Vec<Rgbw, MAX_LEDS>,
    brightness: Brightness,
}

impl<W, const MAX_LEDS: usize> StripSurface<W, MAX_LEDS>
where
    W: SmartLedsWrite<Color = Rgbw>,
{
    /// Create a blank surface of `pixel_count` slots at full brightness
    pub fn new(writer: W, pixel_count: usize) -> Result<Self, CapacityError> {
        let mut pixels = Vec::new();
        pixels
            .resize(pixel_count, BLACK)
            .map_err(|()| CapacityError {
                requested: pixel_count,
                capacity: MAX_LEDS,
            })?;
        Ok(Self {
            writer,
            pixels,
            brightness: Brightness::FULL,
        })
    }

    /// Staged pixels, before brightness is applied
    pub fn pixels(&self) -> &[Rgbw] {
        &self.pixels
    }

    /// Staged brightness
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W, const MAX_LEDS: usize> RenderSurface for StripSurface<W, MAX_LEDS>
where
    W: SmartLedsWrite<Color = Rgbw>,
{
    type Error = W::Error;

    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    fn fill(&mut self, color: Rgbw) {
        self.pixels.fill(color);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let scale = self.brightness.as_u8();
        self.writer
            .write(self.pixels.iter().map(|&color| scale_rgbw(color, scale)))
    }
}
