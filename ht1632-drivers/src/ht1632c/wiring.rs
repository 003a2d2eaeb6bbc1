//! Line driver selection
//!
//! Builds the signal bus named by [`PanelConfig::line_driver`]. Only the
//! chosen side is constructed, so a board that never uses the port bus
//! does not have to hand over its port register.

use embedded_hal::delay::DelayNs;
use ht1632_core::{ConfigError, LineDriver, PanelConfig};
use ht1632_hal::{DigitalLine, LineBus, PinMap, PortBus, PortRegister, SelectedBus};

/// Bus produced by [`bus_from_config`]
pub type ConfiguredBus<CLK, CS, DATA, WR, D, R> =
    SelectedBus<LineBus<CLK, CS, DATA, WR, D>, PortBus<R>>;

/// Build the bus selected by `config`
///
/// `lines` is called for [`LineDriver::PerPin`] and gets the configured
/// settle delay. `port` is called for [`LineDriver::Port`] and is mapped
/// with the configured pin numbers.
pub fn bus_from_config<CLK, CS, DATA, WR, D, R>(
    config: &PanelConfig,
    lines: impl FnOnce() -> (CLK, CS, DATA, WR),
    delay: D,
    port: impl FnOnce() -> R,
) -> Result<ConfiguredBus<CLK, CS, DATA, WR, D, R>, ConfigError>
where
    CLK: DigitalLine,
    CS: DigitalLine,
    DATA: DigitalLine,
    WR: DigitalLine,
    D: DelayNs,
    R: PortRegister,
{
    config.validate()?;

    match config.line_driver {
        LineDriver::PerPin => {
            debug!("ht1632c per-pin lines, settle {} ns", config.settle_ns);
            let (clock, chip_select, data, write_strobe) = lines();
            let bus = LineBus::new(clock, chip_select, data, write_strobe)
                .with_settle(delay, config.settle_ns);
            Ok(SelectedBus::PerPin(bus))
        }
        LineDriver::Port => {
            let pins = config.pins;
            let map = PinMap::from_pins(pins.clock, pins.chip_select, pins.data, pins.write_strobe)
                .ok_or(ConfigError::PinConflict)?;
            debug!("ht1632c port lines");
            Ok(SelectedBus::Port(PortBus::new(port(), map)))
        }
    }
}
