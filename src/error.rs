use core::fmt::Debug;

/// Errors raised while rendering
#[derive(thiserror::Error, Debug)]
pub enum Error<E: Debug> {
    #[error("render surface error: {0:?}")]
    Surface(E),

    #[error("interrupted by stop signal")]
    Interrupted,
}

impl<E: Debug> Error<E> {
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Errors raised while validating the configuration
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("either a preset or an explicit color is required")]
    MissingColor,

    #[error("a preset and an explicit color are mutually exclusive")]
    ConflictingColor,

    #[error("pixel count must be positive, got {0}")]
    InvalidPixelCount(usize),

    #[error("brightness must be between 0.0 and 1.0, got {0}")]
    InvalidBrightness(f32),

    #[error("unknown preset")]
    UnknownPreset,

    #[error("unknown transition")]
    UnknownTransition,

    #[error("unknown animation")]
    UnknownAnimation,
}

/// The strip does not fit into the surface buffer
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("strip of {requested} pixels exceeds surface capacity of {capacity}")]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}
