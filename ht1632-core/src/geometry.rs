//! Panel geometry
//!
//! Each HT1632C drives one 16×8 block of the panel. Chips are numbered
//! along the chip-select chain, left to right then top to bottom:
//!
//! ```text
//!        x 0..15   x 16..31
//! y 0..7   chip 0    chip 1
//! y 8..15  chip 2    chip 3
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Pixel columns driven by one chip
pub const CHIP_WIDTH: u16 = 16;

/// Pixel rows driven by one chip
pub const CHIP_HEIGHT: u16 = 8;

/// Pixels driven by one chip
pub const CHIP_PIXELS: usize = (CHIP_WIDTH * CHIP_HEIGHT) as usize;

/// Chips in the cascade
pub const MAX_CHIPS: usize = 4;

/// Position of a chip's block within the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipPosition {
    /// Block row (0 = top)
    pub row: u8,
    /// Block column (0 = left)
    pub col: u8,
}

impl ChipPosition {
    /// Top-left pixel of the block
    pub fn origin(&self) -> (u16, u16) {
        (self.col as u16 * CHIP_WIDTH, self.row as u16 * CHIP_HEIGHT)
    }
}

/// Panel size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    width: u16,
    height: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::PANEL_32X16
    }
}

impl Geometry {
    /// The 32×16 bicolor board with four chips
    pub const PANEL_32X16: Geometry = Geometry {
        width: 32,
        height: 16,
    };

    /// Create a geometry
    ///
    /// Width and height must be whole multiples of the chip block and the
    /// panel may not need more than [`MAX_CHIPS`] chips.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        let geometry = Self { width, height };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check the block and chip count constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0
            || self.height == 0
            || self.width % CHIP_WIDTH != 0
            || self.height % CHIP_HEIGHT != 0
        {
            return Err(ConfigError::InvalidGeometry);
        }
        if self.chip_count() > MAX_CHIPS {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of chip blocks per row
    pub fn chip_cols(&self) -> usize {
        (self.width / CHIP_WIDTH) as usize
    }

    /// Number of chip block rows
    pub fn chip_rows(&self) -> usize {
        (self.height / CHIP_HEIGHT) as usize
    }

    /// Number of chips in the cascade
    pub fn chip_count(&self) -> usize {
        self.chip_cols() * self.chip_rows()
    }

    /// Block position of chip `index`
    ///
    /// Returns `None` if the index is outside the cascade.
    pub fn chip_position(&self, index: usize) -> Option<ChipPosition> {
        if index >= self.chip_count() {
            return None;
        }
        let cols = self.chip_cols();
        Some(ChipPosition {
            row: (index / cols) as u8,
            col: (index % cols) as u8,
        })
    }
}
