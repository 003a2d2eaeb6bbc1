//! RP2040-specific line HAL for the HT1632C driver
//!
//! Provides the bulk-register [`PortRegister`] implementation on top of
//! the RP2040 single-cycle IO block, so the whole cascade can be driven
//! through [`ht1632_hal::PortBus`] without per-pin HAL calls.
//!
//! Register access goes through `embassy-rp` and is only built for ARM
//! targets; pin validation also builds on the host for tests.

#![no_std]
#![deny(unsafe_code)]

pub mod sio;

// Re-export shared types from ht1632-hal for convenience
pub use ht1632_hal::{PinMap, PortBus, PortRegister};
pub use sio::{pin_map, PinError, MAX_PIN};
#[cfg(target_arch = "arm")]
pub use sio::{port_bus, SioPort};
