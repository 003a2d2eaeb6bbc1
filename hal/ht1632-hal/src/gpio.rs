//! Digital line abstractions
//!
//! One [`DigitalLine`] per wire. Boards either implement it directly or
//! wrap an `embedded-hal` output pin in [`HalLine`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

/// Logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level for a data bit (`true` = High)
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the High level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(bit: bool) -> Self {
        Level::from_bit(bit)
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// Single digital output line
///
/// The protocol has no acknowledgement, so setting a line cannot fail
/// from the driver's point of view.
pub trait DigitalLine {
    /// Drive the line to `level`
    fn set(&mut self, level: Level);

    /// Drive the line high, then low
    ///
    /// Both edges are always emitted; the receiving chip registers the
    /// rising edge.
    fn pulse(&mut self) {
        self.set(Level::High);
        self.set(Level::Low);
    }
}

impl<T: DigitalLine + ?Sized> DigitalLine for &mut T {
    fn set(&mut self, level: Level) {
        (**self).set(level);
    }

    fn pulse(&mut self) {
        (**self).pulse();
    }
}

/// Adapter from an `embedded-hal` output pin
///
/// Pin errors are dropped: a failed edge is indistinguishable from a
/// disconnected wire at this layer.
pub struct HalLine<P> {
    pin: P,
}

impl<P: OutputPin> HalLine<P> {
    /// Wrap an output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> DigitalLine for HalLine<P> {
    fn set(&mut self, level: Level) {
        let _ = self.pin.set_state(level.into());
    }
}

/// Delay provider that never waits
///
/// Used when no settle time is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
