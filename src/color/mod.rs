mod preset;
mod wheel;

use smart_leds::{RGBW, White};

pub use preset::Preset;
pub use wheel::wheel;

/// RGBW color with a dedicated white channel
pub type Rgbw = RGBW<u8>;

/// All channels off
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// Create a color from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Sum of all four channels of a color
pub const fn channel_sum(color: Rgbw) -> u32 {
    color.r as u32 + color.g as u32 + color.b as u32 + color.a.0 as u32
}
