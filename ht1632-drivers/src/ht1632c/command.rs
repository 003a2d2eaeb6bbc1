//! Command words and the serial bit writer
//!
//! Command words are kept in their full 12-bit wire form: the `100`
//! command ID, eight command bits and a trailing don't-care bit (sent as
//! zero). Values follow the HT1632C datasheet command summary.

use ht1632_core::Intensity;
use ht1632_hal::SignalBus;

/// Significant bits of a command word
pub const COMMAND_BITS: u8 = 12;

/// Mask of the significant bits
pub const COMMAND_MASK: u16 = (1 << COMMAND_BITS) - 1;

/// `100` command mode ID
const COMMAND_ID: u16 = 0b100;

/// 12-bit command word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command(u16);

impl Command {
    /// Wrap a raw word, keeping only its low 12 bits
    pub const fn new(word: u16) -> Self {
        Command(word & COMMAND_MASK)
    }

    /// Command for an 8-bit datasheet opcode
    pub const fn from_opcode(opcode: u8) -> Self {
        Command(COMMAND_ID << 9 | (opcode as u16) << 1)
    }

    /// PWM duty command for `intensity` (level 0 = 1/16 duty)
    pub const fn pwm(intensity: Intensity) -> Self {
        Command(PWM_BASE.0 | (intensity.level() as u16) << 1)
    }

    /// Wire word
    pub const fn word(self) -> u16 {
        self.0
    }
}

/// Turn off system oscillator and LED duty cycle generator
pub const SYS_DIS: Command = Command::from_opcode(0b0000_0000);
/// Turn on system oscillator
pub const SYS_EN: Command = Command::from_opcode(0b0000_0001);
/// Turn off LED duty cycle generator
pub const LED_OFF: Command = Command::from_opcode(0b0000_0010);
/// Turn on LED duty cycle generator
pub const LED_ON: Command = Command::from_opcode(0b0000_0011);
/// Turn off blinking
pub const BLINK_OFF: Command = Command::from_opcode(0b0000_1000);
/// Turn on blinking
pub const BLINK_ON: Command = Command::from_opcode(0b0000_1001);
/// Slave mode, clock and sync from OSC/SYN pins
pub const SLAVE_MODE: Command = Command::from_opcode(0b0001_0000);
/// Master mode, on-chip RC oscillator, clock and sync out on OSC/SYN
pub const RC_MASTER_MODE: Command = Command::from_opcode(0b0001_1000);
/// Master mode, external clock on OSC, sync out on SYN
pub const EXT_CLK_MASTER_MODE: Command = Command::from_opcode(0b0001_1100);
/// N-MOS open drain outputs, 8 COM
pub const COM_NMOS_8: Command = Command::from_opcode(0b0010_0000);
/// N-MOS open drain outputs, 16 COM
pub const COM_NMOS_16: Command = Command::from_opcode(0b0010_0100);
/// P-MOS open drain outputs, 8 COM
pub const COM_PMOS_8: Command = Command::from_opcode(0b0010_1000);
/// P-MOS open drain outputs, 16 COM
pub const COM_PMOS_16: Command = Command::from_opcode(0b0010_1100);
/// PWM 1/16 duty; levels 2/16..16/16 add `level << 1`
pub const PWM_BASE: Command = Command::from_opcode(0b1010_0000);

/// Shift the low `width` bits of `value` out, most significant first
pub fn write_bits<B: SignalBus>(bus: &mut B, value: u32, width: u8) {
    for bit in (0..width).rev() {
        bus.strobe_bit((value >> bit) & 1 == 1);
    }
}

/// Send one command word to the selected chips
pub fn write_command<B: SignalBus>(bus: &mut B, command: Command) {
    write_bits(bus, command.word() as u32, COMMAND_BITS);
}
