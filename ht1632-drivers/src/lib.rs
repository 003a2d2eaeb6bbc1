//! HT1632C driver implementation
//!
//! This crate turns a [`ht1632_core::PixelPlane`] into the bit-serial
//! protocol of a cascade of HT1632C LED drivers:
//!
//! - Chip addressing over the chip-select shift register
//! - 12-bit command words
//! - Red/green bit-plane extraction and sequential RAM writes
//! - Per-pin or port line driving chosen from a [`ht1632_core::PanelConfig`]
//! - The [`Ht1632c`] display controller tying it together

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod ht1632c;

pub use ht1632c::{bus_from_config, ConfiguredBus, Ht1632Error, Ht1632c};
