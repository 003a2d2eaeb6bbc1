//! RAM write path
//!
//! Sequential write mode: `101`, a 7-bit start address, then data bits
//! with the address auto-incrementing every nibble.

use ht1632_hal::SignalBus;

use super::command::write_bits;
use super::planes::BitPlane;

/// `101` write mode ID
pub const WRITE_ID: u32 = 0b101;

/// Bits in the mode ID
pub const ID_BITS: u8 = 3;

/// Bits in a RAM address
pub const ADDRESS_BITS: u8 = 7;

/// Largest RAM of the chip (96 nibbles, 16-COM mode)
pub const RAM_BITS: usize = 96 * 4;

/// Bits of one frame write: preamble and both planes
pub const FRAME_BITS: usize = (ID_BITS + ADDRESS_BITS) as usize + 2 * BitPlane::LEN;

/// Start a sequential write at `address`
pub fn write_preamble<B: SignalBus>(bus: &mut B, address: u8) {
    write_bits(bus, WRITE_ID, ID_BITS);
    write_bits(bus, address as u32, ADDRESS_BITS);
}

/// Write both planes from address 0, red first
pub fn write_data<B: SignalBus>(bus: &mut B, red: &BitPlane, green: &BitPlane) {
    write_preamble(bus, 0);
    for bit in red.iter().chain(green.iter()) {
        bus.strobe_bit(bit);
    }
}

/// Write `count` zero bits from address 0
pub fn write_zeros<B: SignalBus>(bus: &mut B, count: usize) {
    write_preamble(bus, 0);
    for _ in 0..count {
        bus.strobe_bit(false);
    }
}
