//! Brightness levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// PWM duty level, 0 (1/16 duty) to 15 (16/16 duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Intensity(u8);

impl Intensity {
    /// Dimmest level
    pub const MIN: Intensity = Intensity(0);

    /// Brightest level
    pub const MAX: Intensity = Intensity(15);

    /// Clamp any integer into `0..=15`
    pub const fn clamped(level: i32) -> Self {
        if level < 0 {
            Self::MIN
        } else if level > Self::MAX.0 as i32 {
            Self::MAX
        } else {
            Intensity(level as u8)
        }
    }

    /// Level in `0..=15`
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for Intensity {
    fn from(level: u8) -> Self {
        Intensity::clamped(level as i32)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}
