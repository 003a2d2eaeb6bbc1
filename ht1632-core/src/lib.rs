//! Board-agnostic core types for HT1632C bicolor panels
//!
//! This crate contains everything that does not toggle a wire:
//!
//! - Pixel values and the red/green bit convention
//! - Panel geometry and the chip layout table
//! - The packed 2-bit-per-pixel frame buffer (an embedded-graphics target)
//! - Brightness levels
//! - Panel configuration and its binary persistence

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod config;
pub mod framebuffer;
pub mod geometry;

pub use color::PixelValue;
pub use config::{ConfigError, Intensity, LineDriver, PanelConfig, PanelPins};
pub use framebuffer::{FrameBuffer, PixelPlane, FRAME_BYTES};
pub use geometry::{ChipPosition, Geometry, CHIP_HEIGHT, CHIP_PIXELS, CHIP_WIDTH, MAX_CHIPS};
