//! HT1632C line abstraction layer
//!
//! This crate defines how the driver toggles the four wires of the
//! HT1632C cascade. The protocol engine in `ht1632-drivers` only ever
//! talks to a [`SignalBus`]; boards pick an implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ht1632-drivers (protocol engine)       │
//! └─────────────────────────────────────────┘
//!                     │ SignalBus
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │    LineBus    │       │    PortBus    │
//! │ 4x DigitalLine│       │ PortRegister  │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!   HalLine (embedded-hal)   ht1632-hal-rp2040 (SIO)
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalLine`] - A single output line with `set` and `pulse`
//! - [`bus::SignalBus`] - The CLK / CS / DATA / WR group
//! - [`bus::PortRegister`] - Atomic set/clear registers of a GPIO port

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use bus::{LineBus, PinMap, PortBus, PortRegister, SelectedBus, Signal, SignalBus};
pub use gpio::{DigitalLine, HalLine, Level, NoDelay};
