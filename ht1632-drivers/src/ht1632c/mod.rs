//! HT1632C LED matrix driver
//!
//! The HT1632C is a 32×8 / 24×16 LED driver with a 3-wire write
//! interface (CS, WR, DATA). On bicolor boards several chips share WR and
//! DATA, and their CS inputs hang off a shift register clocked by CLK,
//! so one chip is addressed by shifting a select flag down the chain.
//!
//! # Serial protocol
//!
//! Every bit is written as WR low, DATA = bit, WR high; chips latch on
//! the rising edge of WR. Frames start with a 3-bit ID:
//!
//! - `100` + 8 command bits + 1 don't-care bit: command (12 bits total)
//! - `101` + 7-bit RAM address + data: sequential write
//!
//! With the N-MOS 8-COM configuration each chip drives a 16×8 block in
//! two colors. Its RAM holds one column per nibble pair, top row first,
//! red columns followed by green columns.

pub mod command;
pub mod controller;
pub mod planes;
pub mod select;
pub mod transfer;
pub mod wiring;

#[cfg(test)]
pub(crate) mod mock;

pub use command::{write_command, Command};
pub use controller::Ht1632c;
pub use planes::{extract_planes, BitPlane};
pub use select::{ChipSelector, Selection};
pub use transfer::{write_data, write_zeros};
pub use wiring::{bus_from_config, ConfiguredBus};

/// HT1632C driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ht1632Error {
    /// Chip index outside the cascade
    Addressing {
        /// Requested chip
        chip: u8,
        /// Chips in the cascade
        chips: u8,
    },
}
