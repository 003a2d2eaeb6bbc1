//! Recording bus for tests
//!
//! Records every edge and replays it through a model of the cascade: a
//! shift register that samples CS on each CLK rising edge (chip `k` is
//! enabled while stage `k` holds Low) and chips that latch DATA on each
//! WR rising edge.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use ht1632_hal::{DigitalLine, Level, PortRegister, Signal, SignalBus};

/// Bus recording every `set`
#[derive(Default)]
pub struct RecordingBus {
    events: Vec<(Signal, Level)>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(Signal, Level)] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Replay recorded edges into a cascade of `chips`
    pub fn replay(&self, chips: usize) -> Replay {
        let mut replay = Replay::new(chips);
        for &(signal, level) in &self.events {
            replay.apply(signal, level);
        }
        replay
    }
}

impl SignalBus for RecordingBus {
    fn set(&mut self, signal: Signal, level: Level) {
        self.events.push((signal, level));
    }
}

/// Recording bus shared by several [`RecordingLine`]s
#[derive(Clone, Default)]
pub struct SharedLog(Rc<RefCell<RecordingBus>>);

impl SharedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Signal, Level)> {
        self.0.borrow().events().to_vec()
    }

    pub fn replay(&self, chips: usize) -> Replay {
        self.0.borrow().replay(chips)
    }
}

/// Single line recording its edges into a [`SharedLog`]
pub struct RecordingLine {
    signal: Signal,
    log: SharedLog,
}

impl RecordingLine {
    /// Clock, chip-select, data and write-strobe lines on one log
    pub fn four(log: &SharedLog) -> (Self, Self, Self, Self) {
        let line = |signal| RecordingLine {
            signal,
            log: log.clone(),
        };
        (
            line(Signal::Clock),
            line(Signal::ChipSelect),
            line(Signal::Data),
            line(Signal::WriteStrobe),
        )
    }
}

impl DigitalLine for RecordingLine {
    fn set(&mut self, level: Level) {
        self.log.0.borrow_mut().set(self.signal, level);
    }
}

/// Port register feeding a [`RecordingBus`]
///
/// Lets the port bus be checked with the same replay model.
pub struct RecordingPort {
    pub bus: RecordingBus,
    out: u32,
}

/// Pins used with [`RecordingPort`]
pub const PORT_PINS: [(Signal, u32); 4] = [
    (Signal::Clock, 1 << 15),
    (Signal::ChipSelect, 1 << 12),
    (Signal::Data, 1 << 14),
    (Signal::WriteStrobe, 1 << 13),
];

impl RecordingPort {
    pub fn new() -> Self {
        Self {
            bus: RecordingBus::new(),
            out: 0,
        }
    }

    /// Current output register value
    pub fn out(&self) -> u32 {
        self.out
    }

    /// Record every pin named by `mask`, changed or not
    fn write(&mut self, mask: u32, level: Level) {
        for &(signal, pin) in &PORT_PINS {
            if mask & pin != 0 {
                self.bus.set(signal, level);
            }
        }
        if level.is_high() {
            self.out |= mask;
        } else {
            self.out &= !mask;
        }
    }
}

impl PortRegister for RecordingPort {
    fn set_bits(&mut self, mask: u32) {
        self.write(mask, Level::High);
    }

    fn clear_bits(&mut self, mask: u32) {
        self.write(mask, Level::Low);
    }
}

/// Bits received while one set of chips was enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Bit `k` set if chip `k` was enabled
    pub chips: u8,
    pub bits: Vec<bool>,
}

/// Cascade state after replay
pub struct Replay {
    levels: [Option<Level>; 4],
    chain: Vec<Option<Level>>,
    transfers: Vec<Transfer>,
    clocked_since_bit: bool,
}

impl Replay {
    fn new(chips: usize) -> Self {
        Self {
            levels: [None; 4],
            chain: std::vec![None; chips],
            transfers: Vec::new(),
            clocked_since_bit: true,
        }
    }

    fn index(signal: Signal) -> usize {
        match signal {
            Signal::Clock => 0,
            Signal::ChipSelect => 1,
            Signal::Data => 2,
            Signal::WriteStrobe => 3,
        }
    }

    fn apply(&mut self, signal: Signal, level: Level) {
        let slot = Self::index(signal);
        let rising = level == Level::High && self.levels[slot] != Some(Level::High);
        self.levels[slot] = Some(level);

        if !rising {
            return;
        }
        match signal {
            Signal::Clock => {
                let cs = self.levels[Self::index(Signal::ChipSelect)];
                self.chain.rotate_right(1);
                if let Some(first) = self.chain.first_mut() {
                    *first = cs;
                }
                self.clocked_since_bit = true;
            }
            Signal::WriteStrobe => {
                let bit = self.levels[Self::index(Signal::Data)] == Some(Level::High);
                let chips = self.enabled();
                match self.transfers.last_mut() {
                    Some(last) if !self.clocked_since_bit && last.chips == chips => {
                        last.bits.push(bit)
                    }
                    _ => self.transfers.push(Transfer {
                        chips,
                        bits: std::vec![bit],
                    }),
                }
                self.clocked_since_bit = false;
            }
            _ => {}
        }
    }

    /// Mask of chips whose select stage holds Low
    pub fn enabled(&self) -> u8 {
        self.chain
            .iter()
            .enumerate()
            .filter(|(_, stage)| **stage == Some(Level::Low))
            .fold(0, |mask, (k, _)| mask | 1 << k)
    }

    /// Select stages of the chain
    pub fn chain(&self) -> &[Option<Level>] {
        &self.chain
    }

    /// Final level of every signal (CLK, CS, DATA, WR)
    pub fn levels(&self) -> [Option<Level>; 4] {
        self.levels
    }

    /// Bit runs grouped by enabled chips
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Every latched bit, in order
    pub fn latched_bits(&self) -> Vec<bool> {
        self.transfers
            .iter()
            .flat_map(|t| t.bits.iter().copied())
            .collect()
    }
}

/// Read bits MSB first
pub fn bits_to_word(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |word, &bit| word << 1 | bit as u32)
}
