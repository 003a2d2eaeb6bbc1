//! Single-cycle IO (SIO) GPIO output port
//!
//! The SIO block exposes atomic set and clear registers for the bank 0
//! outputs, which is exactly the [`PortRegister`] contract.

use ht1632_hal::PinMap;
#[cfg(target_arch = "arm")]
use ht1632_hal::{PortBus, PortRegister};

/// Highest bank 0 GPIO number
pub const MAX_PIN: u8 = 29;

/// Why a pin assignment was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin above GPIO29
    OutOfBank(u8),
    /// Two lines share a pin
    Collision(u8),
}

/// Map the four lines onto bank 0
pub fn pin_map(clock: u8, chip_select: u8, data: u8, write_strobe: u8) -> Result<PinMap, PinError> {
    let pins = [clock, chip_select, data, write_strobe];
    if let Some(&pin) = pins.iter().find(|&&pin| pin > MAX_PIN) {
        return Err(PinError::OutOfBank(pin));
    }
    for (i, pin) in pins.iter().enumerate() {
        if pins[i + 1..].contains(pin) {
            return Err(PinError::Collision(*pin));
        }
    }
    PinMap::from_pins(clock, chip_select, data, write_strobe).ok_or(PinError::Collision(clock))
}

/// Handle to the SIO output registers
///
/// The pins used with this port must already be configured as SIO
/// outputs, for example by creating an `embassy_rp::gpio::Output` for each
/// and forgetting it, and nothing else may drive them afterwards.
#[cfg(target_arch = "arm")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SioPort {
    _private: (),
}

#[cfg(target_arch = "arm")]
impl SioPort {
    /// Take the SIO output registers
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_arch = "arm")]
impl Default for SioPort {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "arm")]
impl PortRegister for SioPort {
    fn set_bits(&mut self, mask: u32) {
        embassy_rp::pac::SIO.gpio_out(0).value_set().write_value(mask);
    }

    fn clear_bits(&mut self, mask: u32) {
        embassy_rp::pac::SIO.gpio_out(0).value_clr().write_value(mask);
    }
}

/// Build a port bus from bank 0 pin numbers
#[cfg(target_arch = "arm")]
pub fn port_bus(
    port: SioPort,
    clock: u8,
    chip_select: u8,
    data: u8,
    write_strobe: u8,
) -> Result<PortBus<SioPort>, PinError> {
    let pins = pin_map(clock, chip_select, data, write_strobe)?;
    Ok(PortBus::new(port, pins))
}
