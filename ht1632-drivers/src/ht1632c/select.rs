//! Chip addressing over the chip-select shift register
//!
//! CS is active low. Each CLK pulse shifts the current CS level into the
//! first stage and moves every stage one chip further down the chain, so
//! `chips` pulses load the same flag into every chip.

use ht1632_hal::{Level, Signal, SignalBus};

use super::Ht1632Error;

/// CS level that enables a chip
const SELECT: Level = Level::Low;

/// CS level that disables a chip
const DESELECT: Level = Level::High;

/// Known state of the select chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// No chip enabled
    Deselected,
    /// Every chip enabled
    All,
    /// Exactly one chip enabled
    Chip(u8),
}

/// Select chain state machine
///
/// The state is unknown until the first selection call.
#[derive(Debug, Clone)]
pub struct ChipSelector {
    chips: u8,
    state: Option<Selection>,
}

impl ChipSelector {
    /// Create a selector for a cascade of `chips`
    pub fn new(chips: u8) -> Self {
        Self { chips, state: None }
    }

    /// Chips in the cascade
    pub fn chips(&self) -> u8 {
        self.chips
    }

    /// Current selection, `None` before the first call
    pub fn selection(&self) -> Option<Selection> {
        self.state
    }

    /// Enable every chip
    pub fn select_all<B: SignalBus>(&mut self, bus: &mut B) {
        self.fill_chain(bus, SELECT);
        self.state = Some(Selection::All);
    }

    /// Disable every chip
    pub fn select_none<B: SignalBus>(&mut self, bus: &mut B) {
        self.fill_chain(bus, DESELECT);
        self.state = Some(Selection::Deselected);
    }

    /// Enable only chip `chip`
    ///
    /// The chain is always reset first; an out-of-range index leaves every
    /// chip disabled and returns [`Ht1632Error::Addressing`].
    pub fn select_one<B: SignalBus>(&mut self, bus: &mut B, chip: u8) -> Result<(), Ht1632Error> {
        self.select_none(bus);

        if chip >= self.chips {
            warn!("chip {} out of range (cascade of {})", chip, self.chips);
            return Err(Ht1632Error::Addressing {
                chip,
                chips: self.chips,
            });
        }

        bus.set(Signal::ChipSelect, SELECT);
        bus.pulse(Signal::Clock);
        bus.set(Signal::ChipSelect, DESELECT);
        for _ in 0..chip {
            bus.pulse(Signal::Clock);
        }

        self.state = Some(Selection::Chip(chip));
        Ok(())
    }

    fn fill_chain<B: SignalBus>(&self, bus: &mut B, level: Level) {
        bus.set(Signal::ChipSelect, level);
        for _ in 0..self.chips {
            bus.pulse(Signal::Clock);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ht1632c::mock::RecordingBus;
    use proptest::prelude::*;

    const CHIPS: u8 = 4;

    #[test]
    fn test_initial_state_unknown() {
        let selector = ChipSelector::new(CHIPS);
        assert_eq!(selector.selection(), None);
    }

    #[test]
    fn test_select_all_and_none() {
        let mut bus = RecordingBus::new();
        let mut selector = ChipSelector::new(CHIPS);

        selector.select_all(&mut bus);
        assert_eq!(bus.replay(4).enabled(), 0b1111);
        assert_eq!(selector.selection(), Some(Selection::All));

        selector.select_none(&mut bus);
        assert_eq!(bus.replay(4).enabled(), 0);
        assert_eq!(selector.selection(), Some(Selection::Deselected));
    }

    #[test]
    fn test_select_one_enables_exactly_that_chip() {
        for chip in 0..CHIPS {
            let mut bus = RecordingBus::new();
            let mut selector = ChipSelector::new(CHIPS);
            selector.select_all(&mut bus);

            selector.select_one(&mut bus, chip).unwrap();

            assert_eq!(bus.replay(4).enabled(), 1 << chip);
            assert_eq!(selector.selection(), Some(Selection::Chip(chip)));
        }
    }

    #[test]
    fn test_select_one_pulse_count() {
        let mut bus = RecordingBus::new();
        let mut selector = ChipSelector::new(CHIPS);
        selector.select_one(&mut bus, 2).unwrap();

        let clock_rises = bus
            .events()
            .iter()
            .filter(|&&e| e == (Signal::Clock, Level::High))
            .count();
        // Reset, flag, then two advances
        assert_eq!(clock_rises, 4 + 1 + 2);
    }

    #[test]
    fn test_out_of_range_stops_after_reset() {
        let mut reference = RecordingBus::new();
        ChipSelector::new(CHIPS).select_none(&mut reference);

        let mut bus = RecordingBus::new();
        let mut selector = ChipSelector::new(CHIPS);
        let result = selector.select_one(&mut bus, 4);

        assert_eq!(result, Err(Ht1632Error::Addressing { chip: 4, chips: 4 }));
        assert_eq!(bus.events(), reference.events());
        assert_eq!(selector.selection(), Some(Selection::Deselected));
    }

    /// Drive the selector with an arbitrary history
    fn apply_history(selector: &mut ChipSelector, bus: &mut RecordingBus, history: &[u8]) {
        for &op in history {
            match op {
                0 => selector.select_all(bus),
                1 => selector.select_none(bus),
                n => {
                    let _ = selector.select_one(bus, n - 2);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_select_one_then_none_is_a_reset(
            history in proptest::collection::vec(0u8..7, 0..8),
            chip in 0u8..CHIPS,
        ) {
            let mut expected_bus = RecordingBus::new();
            let mut expected = ChipSelector::new(CHIPS);
            apply_history(&mut expected, &mut expected_bus, &history);
            expected.select_none(&mut expected_bus);

            let mut bus = RecordingBus::new();
            let mut selector = ChipSelector::new(CHIPS);
            apply_history(&mut selector, &mut bus, &history);
            selector.select_one(&mut bus, chip).unwrap();
            selector.select_none(&mut bus);

            let expected_replay = expected_bus.replay(4);
            let replay = bus.replay(4);
            prop_assert_eq!(replay.levels(), expected_replay.levels());
            prop_assert_eq!(replay.chain(), expected_replay.chain());
            prop_assert_eq!(replay.enabled(), 0);
            prop_assert_eq!(selector.selection(), Some(Selection::Deselected));
        }
    }
}
