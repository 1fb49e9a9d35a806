use crate::color::{BLACK, Rgbw, rgbw};

/// Number of positions in one wheel segment
const SEGMENT: i32 = 85;

/// Color wheel position to color
///
/// The wheel cycles red → green → blue → red over positions `0..=255`,
/// interpolating linearly inside each of the three segments. The white
/// channel is always off. Positions outside of the wheel are black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(pos: i32) -> Rgbw {
    if pos < 0 || pos > 255 {
        return BLACK;
    }
    if pos < SEGMENT {
        let rising = (pos * 3) as u8;
        return rgbw(255 - rising, rising, 0, 0);
    }
    if pos < SEGMENT * 2 {
        let rising = ((pos - SEGMENT) * 3) as u8;
        return rgbw(0, 255 - rising, rising, 0);
    }
    let rising = ((pos - SEGMENT * 2) * 3) as u8;
    rgbw(rising, 0, 255 - rising, 0)
}
