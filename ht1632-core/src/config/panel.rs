//! Panel configuration
//!
//! Describes one display: its size, wiring, how the wires are driven and
//! the brightness to start at.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, Intensity};
use crate::geometry::Geometry;

/// Current config layout version
pub const CONFIG_VERSION: u8 = 1;

/// How the protocol lines are toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineDriver {
    /// One HAL call per edge on each pin
    #[default]
    PerPin,
    /// Set/clear registers of the GPIO port shared by all four pins
    Port,
}

/// GPIO numbers of the four protocol lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelPins {
    /// Chip-select shift register clock
    pub clock: u8,
    /// Chip-select data
    pub chip_select: u8,
    /// Serial data
    pub data: u8,
    /// Write strobe
    pub write_strobe: u8,
}

impl Default for PanelPins {
    fn default() -> Self {
        Self {
            clock: 15,
            chip_select: 12,
            data: 14,
            write_strobe: 13,
        }
    }
}

impl PanelPins {
    /// Check that no two lines share a pin
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = [self.clock, self.chip_select, self.data, self.write_strobe];
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].contains(a) {
                return Err(ConfigError::PinConflict);
            }
        }
        Ok(())
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Layout version, see [`CONFIG_VERSION`]
    pub version: u8,
    /// Panel size
    pub geometry: Geometry,
    /// Brightness applied by the first `begin()`
    pub intensity: Intensity,
    /// Line wiring
    pub pins: PanelPins,
    /// Line implementation
    pub line_driver: LineDriver,
    /// Settle delay after every edge (0 = none)
    pub settle_ns: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            geometry: Geometry::PANEL_32X16,
            intensity: Intensity::MAX,
            pins: PanelPins::default(),
            line_driver: LineDriver::PerPin,
            settle_ns: 0,
        }
    }
}

impl PanelConfig {
    /// Check geometry and wiring
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.pins.validate()
    }

    /// Encode into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode and validate a stored config
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: PanelConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        config.validate()?;
        Ok(config)
    }
}
