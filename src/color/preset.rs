//! Named color presets

use crate::color::{Rgbw, rgbw};

const PRESET_NAME_RED: &str = "red";
const PRESET_NAME_ORANGE: &str = "orange";
const PRESET_NAME_YELLOW: &str = "yellow";
const PRESET_NAME_GREEN: &str = "green";
const PRESET_NAME_BLUE: &str = "blue";
const PRESET_NAME_PINK: &str = "pink";
const PRESET_NAME_PURPLE: &str = "purple";
const PRESET_NAME_CYAN: &str = "cyan";
const PRESET_NAME_WHITE: &str = "white";
const PRESET_NAME_WARM_WHITE: &str = "warm-white";
const PRESET_NAME_COOL_WHITE: &str = "cool-white";
const PRESET_NAME_RAINBOW: &str = "rainbow";
const PRESET_NAME_OFF: &str = "off";

/// Known presets that can be requested by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Pink,
    Purple,
    Cyan,
    White,
    WarmWhite,
    CoolWhite,
    Rainbow,
    Off,
}

impl Preset {
    /// Every preset, in the order they are listed to users
    pub const ALL: [Self; 13] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Pink,
        Self::Purple,
        Self::Cyan,
        Self::White,
        Self::WarmWhite,
        Self::CoolWhite,
        Self::Rainbow,
        Self::Off,
    ];

    /// Solid color of the preset
    ///
    /// Returns `None` for presets that vary per pixel.
    pub const fn solid_color(self) -> Option<Rgbw> {
        Some(match self {
            Self::Red => rgbw(255, 0, 0, 0),
            Self::Orange => rgbw(205, 30, 0, 0),
            Self::Yellow => rgbw(200, 100, 0, 0),
            Self::Green => rgbw(0, 255, 0, 0),
            Self::Blue => rgbw(0, 0, 255, 0),
            Self::Pink => rgbw(255, 50, 50, 0),
            Self::Purple => rgbw(255, 0, 255, 0),
            Self::Cyan => rgbw(0, 255, 255, 0),
            Self::White => rgbw(255, 255, 255, 255),
            Self::WarmWhite => rgbw(0, 0, 0, 255),
            Self::CoolWhite => rgbw(0, 0, 255, 255),
            Self::Off => rgbw(0, 0, 0, 0),
            Self::Rainbow => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => PRESET_NAME_RED,
            Self::Orange => PRESET_NAME_ORANGE,
            Self::Yellow => PRESET_NAME_YELLOW,
            Self::Green => PRESET_NAME_GREEN,
            Self::Blue => PRESET_NAME_BLUE,
            Self::Pink => PRESET_NAME_PINK,
            Self::Purple => PRESET_NAME_PURPLE,
            Self::Cyan => PRESET_NAME_CYAN,
            Self::White => PRESET_NAME_WHITE,
            Self::WarmWhite => PRESET_NAME_WARM_WHITE,
            Self::CoolWhite => PRESET_NAME_COOL_WHITE,
            Self::Rainbow => PRESET_NAME_RAINBOW,
            Self::Off => PRESET_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRESET_NAME_RED => Some(Self::Red),
            PRESET_NAME_ORANGE => Some(Self::Orange),
            PRESET_NAME_YELLOW => Some(Self::Yellow),
            PRESET_NAME_GREEN => Some(Self::Green),
            PRESET_NAME_BLUE => Some(Self::Blue),
            PRESET_NAME_PINK => Some(Self::Pink),
            PRESET_NAME_PURPLE => Some(Self::Purple),
            PRESET_NAME_CYAN => Some(Self::Cyan),
            PRESET_NAME_WHITE => Some(Self::White),
            PRESET_NAME_WARM_WHITE => Some(Self::WarmWhite),
            PRESET_NAME_COOL_WHITE => Some(Self::CoolWhite),
            PRESET_NAME_RAINBOW => Some(Self::Rainbow),
            PRESET_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}
