//! Signal bus abstractions
//!
//! The HT1632C cascade is driven by four shared wires. A [`SignalBus`]
//! owns all four so that the protocol engine can sequence edges without
//! caring whether they come from individual pins or a port register.

use embedded_hal::delay::DelayNs;

use crate::gpio::{DigitalLine, Level, NoDelay};

/// The four protocol signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Clock of the chip-select shift register
    Clock,
    /// Chip-select flag shifted into the cascade (active low)
    ChipSelect,
    /// Serial data
    Data,
    /// Write strobe, data is latched on the rising edge
    WriteStrobe,
}

/// Group of protocol lines
pub trait SignalBus {
    /// Drive `signal` to `level`
    fn set(&mut self, signal: Signal, level: Level);

    /// Drive `signal` high, then low
    fn pulse(&mut self, signal: Signal) {
        self.set(signal, Level::High);
        self.set(signal, Level::Low);
    }

    /// Shift one bit into the selected chips
    ///
    /// WR low, DATA to `bit`, WR high.
    fn strobe_bit(&mut self, bit: bool) {
        self.set(Signal::WriteStrobe, Level::Low);
        self.set(Signal::Data, Level::from_bit(bit));
        self.set(Signal::WriteStrobe, Level::High);
    }
}

impl<T: SignalBus + ?Sized> SignalBus for &mut T {
    fn set(&mut self, signal: Signal, level: Level) {
        (**self).set(signal, level);
    }

    fn pulse(&mut self, signal: Signal) {
        (**self).pulse(signal);
    }

    fn strobe_bit(&mut self, bit: bool) {
        (**self).strobe_bit(bit);
    }
}

/// Portable bus: one [`DigitalLine`] per signal
///
/// An optional settle delay is inserted after every edge for boards with
/// long or heavily loaded wires.
pub struct LineBus<CLK, CS, DATA, WR, D = NoDelay> {
    clock: CLK,
    chip_select: CS,
    data: DATA,
    write_strobe: WR,
    delay: D,
    settle_ns: u32,
}

impl<CLK, CS, DATA, WR> LineBus<CLK, CS, DATA, WR, NoDelay>
where
    CLK: DigitalLine,
    CS: DigitalLine,
    DATA: DigitalLine,
    WR: DigitalLine,
{
    /// Create a bus without settle delay
    pub fn new(clock: CLK, chip_select: CS, data: DATA, write_strobe: WR) -> Self {
        Self {
            clock,
            chip_select,
            data,
            write_strobe,
            delay: NoDelay,
            settle_ns: 0,
        }
    }

    /// Add a fixed settle delay after every edge
    pub fn with_settle<D: DelayNs>(
        self,
        delay: D,
        settle_ns: u32,
    ) -> LineBus<CLK, CS, DATA, WR, D> {
        LineBus {
            clock: self.clock,
            chip_select: self.chip_select,
            data: self.data,
            write_strobe: self.write_strobe,
            delay,
            settle_ns,
        }
    }
}

impl<CLK, CS, DATA, WR, D> LineBus<CLK, CS, DATA, WR, D> {
    /// Configured settle delay in nanoseconds
    pub fn settle_ns(&self) -> u32 {
        self.settle_ns
    }

    /// Release the lines
    pub fn release(self) -> (CLK, CS, DATA, WR) {
        (self.clock, self.chip_select, self.data, self.write_strobe)
    }
}

impl<CLK, CS, DATA, WR, D> SignalBus for LineBus<CLK, CS, DATA, WR, D>
where
    CLK: DigitalLine,
    CS: DigitalLine,
    DATA: DigitalLine,
    WR: DigitalLine,
    D: DelayNs,
{
    fn set(&mut self, signal: Signal, level: Level) {
        match signal {
            Signal::Clock => self.clock.set(level),
            Signal::ChipSelect => self.chip_select.set(level),
            Signal::Data => self.data.set(level),
            Signal::WriteStrobe => self.write_strobe.set(level),
        }
        if self.settle_ns > 0 {
            self.delay.delay_ns(self.settle_ns);
        }
    }
}

/// GPIO port with atomic set/clear registers
///
/// Writing a mask only affects the pins whose bits are set, so other
/// users of the port are left alone.
pub trait PortRegister {
    /// Drive every pin in `mask` high
    fn set_bits(&mut self, mask: u32);

    /// Drive every pin in `mask` low
    fn clear_bits(&mut self, mask: u32);
}

/// Bit masks of the four signals within one port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub clock: u32,
    pub chip_select: u32,
    pub data: u32,
    pub write_strobe: u32,
}

impl PinMap {
    /// Build masks from pin numbers within the port (0-31)
    ///
    /// Returns `None` if a pin is out of range or two signals share a pin.
    pub fn from_pins(clock: u8, chip_select: u8, data: u8, write_strobe: u8) -> Option<Self> {
        let pins = [clock, chip_select, data, write_strobe];
        let mut seen = 0u32;
        for &pin in &pins {
            if pin >= 32 {
                return None;
            }
            let mask = 1 << pin;
            if seen & mask != 0 {
                return None;
            }
            seen |= mask;
        }

        Some(Self {
            clock: 1 << clock,
            chip_select: 1 << chip_select,
            data: 1 << data,
            write_strobe: 1 << write_strobe,
        })
    }

    /// Mask of a signal
    pub fn mask(&self, signal: Signal) -> u32 {
        match signal {
            Signal::Clock => self.clock,
            Signal::ChipSelect => self.chip_select,
            Signal::Data => self.data,
            Signal::WriteStrobe => self.write_strobe,
        }
    }
}

/// Fast bus: all four signals on one port register
///
/// Produces the same latched bits as [`LineBus`] with fewer register
/// writes per bit.
pub struct PortBus<R> {
    port: R,
    pins: PinMap,
}

impl<R: PortRegister> PortBus<R> {
    /// Create a port bus
    pub fn new(port: R, pins: PinMap) -> Self {
        Self { port, pins }
    }

    /// Pin masks in use
    pub fn pins(&self) -> PinMap {
        self.pins
    }

    /// Release the port
    pub fn release(self) -> R {
        self.port
    }
}

impl<R: PortRegister> SignalBus for PortBus<R> {
    fn set(&mut self, signal: Signal, level: Level) {
        let mask = self.pins.mask(signal);
        match level {
            Level::High => self.port.set_bits(mask),
            Level::Low => self.port.clear_bits(mask),
        }
    }

    fn pulse(&mut self, signal: Signal) {
        let mask = self.pins.mask(signal);
        self.port.set_bits(mask);
        self.port.clear_bits(mask);
    }

    fn strobe_bit(&mut self, bit: bool) {
        // WR falls together with a zero data bit; DATA is stable before WR rises
        if bit {
            self.port.clear_bits(self.pins.write_strobe);
            self.port.set_bits(self.pins.data);
        } else {
            self.port
                .clear_bits(self.pins.write_strobe | self.pins.data);
        }
        self.port.set_bits(self.pins.write_strobe);
    }
}

/// Bus chosen at run time from configuration
pub enum SelectedBus<A, B> {
    /// Portable per-pin toggling
    PerPin(A),
    /// Bulk port register writes
    Port(B),
}

impl<A: SignalBus, B: SignalBus> SignalBus for SelectedBus<A, B> {
    fn set(&mut self, signal: Signal, level: Level) {
        match self {
            SelectedBus::PerPin(bus) => bus.set(signal, level),
            SelectedBus::Port(bus) => bus.set(signal, level),
        }
    }

    fn pulse(&mut self, signal: Signal) {
        match self {
            SelectedBus::PerPin(bus) => bus.pulse(signal),
            SelectedBus::Port(bus) => bus.pulse(signal),
        }
    }

    fn strobe_bit(&mut self, bit: bool) {
        match self {
            SelectedBus::PerPin(bus) => bus.strobe_bit(bit),
            SelectedBus::Port(bus) => bus.strobe_bit(bit),
        }
    }
}
