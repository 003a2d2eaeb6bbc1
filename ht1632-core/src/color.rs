//! Pixel values
//!
//! Every pixel is a 2-bit code. Bit 1 drives the red LED and bit 0 the
//! green LED, so `Orange` lights both.

use embedded_graphics::pixelcolor::raw::{RawData, RawU2};
use embedded_graphics::pixelcolor::PixelColor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit of the pixel code that drives the red LED
pub const RED_BIT: u8 = 0b10;

/// Bit of the pixel code that drives the green LED
pub const GREEN_BIT: u8 = 0b01;

/// 2-bit pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PixelValue {
    /// Both LEDs off
    #[default]
    Black = 0,
    /// Green LED only
    Green = GREEN_BIT,
    /// Red LED only
    Red = RED_BIT,
    /// Red and green LEDs
    Orange = RED_BIT | GREEN_BIT,
}

impl PixelValue {
    /// Decode the low two bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => PixelValue::Black,
            GREEN_BIT => PixelValue::Green,
            RED_BIT => PixelValue::Red,
            _ => PixelValue::Orange,
        }
    }

    /// Compose a value from its LED states
    pub const fn from_leds(red: bool, green: bool) -> Self {
        let mut bits = 0;
        if red {
            bits |= RED_BIT;
        }
        if green {
            bits |= GREEN_BIT;
        }
        Self::from_bits(bits)
    }

    /// 2-bit code
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Red LED state
    pub const fn red(self) -> bool {
        self.bits() & RED_BIT != 0
    }

    /// Green LED state
    pub const fn green(self) -> bool {
        self.bits() & GREEN_BIT != 0
    }
}

impl PixelColor for PixelValue {
    type Raw = RawU2;
}

impl From<RawU2> for PixelValue {
    fn from(raw: RawU2) -> Self {
        PixelValue::from_bits(raw.into_inner())
    }
}

impl From<PixelValue> for RawU2 {
    fn from(value: PixelValue) -> Self {
        RawU2::new(value.bits())
    }
}
