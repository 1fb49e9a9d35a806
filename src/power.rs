//! Power budget for a full strip
//!
//! Each pixel draws ~20mA per diode at full brightness, 80mA in total. The
//! budget caps a strip whose colors add up to more than the equivalent of
//! 60mA per pixel. This is a coarse heuristic, not a power model.

use tracing::info;

use crate::brightness::Brightness;
use crate::color::channel_sum;
use crate::provider::PixelProvider;

/// Full-strip channel sum above which brightness is capped
pub const CHANNEL_SUM_LIMIT: u32 = 756;

/// Brightness cap applied to strips over the limit
pub const BRIGHTNESS_CAP: Brightness = Brightness::new_const(0.75);

/// Sum of every channel of every pixel
pub fn strip_channel_sum<P: PixelProvider + ?Sized>(provider: &P, pixel_count: usize) -> u32 {
    (0..pixel_count)
        .map(|index| channel_sum(provider.pixel_color(index)))
        .fold(0u32, u32::saturating_add)
}

/// Brightness that keeps the strip inside the power budget
///
/// Returns `brightness` unchanged unless the strip exceeds
/// [`CHANNEL_SUM_LIMIT`] and `brightness` is above [`BRIGHTNESS_CAP`].
pub fn limit_brightness<P: PixelProvider + ?Sized>(
    provider: &P,
    pixel_count: usize,
    brightness: Brightness,
) -> Brightness {
    let sum = strip_channel_sum(provider, pixel_count);
    if sum > CHANNEL_SUM_LIMIT && brightness > BRIGHTNESS_CAP {
        info!(
            sum,
            requested = brightness.get(),
            cap = BRIGHTNESS_CAP.get(),
            "brightness capped by power budget"
        );
        return BRIGHTNESS_CAP;
    }
    brightness
}
