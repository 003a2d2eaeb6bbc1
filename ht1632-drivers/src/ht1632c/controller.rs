//! Display controller
//!
//! Owns the signal bus and the pixel plane and sequences selection,
//! command and data transfers. Every public operation starts and ends
//! with the chain in a known state, so calls compose back to back.
//!
//! Operations are blocking and must not be interleaved with other users
//! of the four lines.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::Pixel;
use ht1632_core::{ConfigError, FrameBuffer, Geometry, Intensity, PanelConfig, PixelPlane, PixelValue};
use ht1632_hal::SignalBus;

use super::command::{
    write_command, Command, BLINK_OFF, BLINK_ON, COM_NMOS_8, LED_OFF, LED_ON, RC_MASTER_MODE,
    SYS_DIS, SYS_EN,
};
use super::planes::extract_planes;
use super::select::{ChipSelector, Selection};
use super::transfer::{write_data, write_zeros, RAM_BITS};
use super::Ht1632Error;

/// HT1632C cascade driving one panel
pub struct Ht1632c<B, P = FrameBuffer> {
    bus: B,
    plane: P,
    selector: ChipSelector,
    intensity: Intensity,
}

impl<B: SignalBus> Ht1632c<B, FrameBuffer> {
    /// Create a controller with a fresh frame buffer for `geometry`
    ///
    /// Runs [`begin`](Self::begin) before returning.
    pub fn with_geometry(
        bus: B,
        geometry: Geometry,
        intensity: Intensity,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(bus, FrameBuffer::new(geometry)?, intensity))
    }
}

impl<B: SignalBus, P: PixelPlane> Ht1632c<B, P> {
    /// Create a controller over an existing plane
    ///
    /// The cascade size follows the plane's geometry. Runs
    /// [`begin`](Self::begin) before returning.
    pub fn new(bus: B, plane: P, intensity: Intensity) -> Self {
        let chips = plane.geometry().chip_count() as u8;
        let mut display = Self {
            bus,
            plane,
            selector: ChipSelector::new(chips),
            intensity,
        };
        display.begin();
        display
    }

    /// Create a controller from a panel configuration
    ///
    /// The plane must match the configured geometry.
    pub fn from_config(bus: B, plane: P, config: &PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if plane.geometry() != config.geometry {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(Self::new(bus, plane, config.intensity))
    }

    /// Initialize every chip
    ///
    /// The oscillator is stopped before the mode registers are written and
    /// restarted before the LEDs are enabled.
    pub fn begin(&mut self) {
        debug!(
            "ht1632c begin: {} chips, intensity {}",
            self.selector.chips(),
            self.intensity.level()
        );

        let sequence = [
            SYS_DIS,
            COM_NMOS_8,
            RC_MASTER_MODE,
            SYS_EN,
            self.intensity_command(),
            BLINK_OFF,
            LED_ON,
        ];
        for command in sequence {
            self.broadcast(command);
        }
    }

    /// Change brightness, clamped to `0..=15`
    ///
    /// Re-runs the full [`begin`](Self::begin) sequence.
    pub fn set_intensity(&mut self, level: i32) {
        self.intensity = Intensity::clamped(level);
        debug!("ht1632c intensity {}", self.intensity.level());
        self.begin();
    }

    /// Current brightness
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// PWM command sent by [`begin`](Self::begin)
    pub fn intensity_command(&self) -> Command {
        Command::pwm(self.intensity)
    }

    /// Zero the whole RAM of every chip
    ///
    /// Independent of the frame buffer contents.
    pub fn clear(&mut self) {
        debug!("ht1632c clear: {} bits per chip", RAM_BITS);
        self.selector.select_all(&mut self.bus);
        write_zeros(&mut self.bus, RAM_BITS);
        self.selector.select_none(&mut self.bus);
    }

    /// Send the frame buffer to the panel
    pub fn show(&mut self) -> Result<(), Ht1632Error> {
        // The oscillator may have been stopped by interference
        self.broadcast(SYS_EN);

        let geometry = self.plane.geometry();
        for chip in 0..geometry.chip_count() {
            let position = geometry
                .chip_position(chip)
                .ok_or(Ht1632Error::Addressing {
                    chip: chip as u8,
                    chips: self.selector.chips(),
                })?;
            self.selector.select_one(&mut self.bus, chip as u8)?;

            let (red, green) = extract_planes(&self.plane, position);
            trace!(
                "ht1632c chip {}: {} red, {} green",
                chip,
                red.count_ones(),
                green.count_ones()
            );
            write_data(&mut self.bus, &red, &green);

            self.selector.select_none(&mut self.bus);
        }
        Ok(())
    }

    /// Enable or disable hardware blinking
    ///
    /// [`begin`](Self::begin) turns blinking off again.
    pub fn set_blink(&mut self, on: bool) {
        self.broadcast(if on { BLINK_ON } else { BLINK_OFF });
    }

    /// Enable or disable the LED duty cycle generator
    pub fn set_led_output(&mut self, on: bool) {
        self.broadcast(if on { LED_ON } else { LED_OFF });
    }

    /// Send a command to every chip
    fn broadcast(&mut self, command: Command) {
        self.selector.select_all(&mut self.bus);
        write_command(&mut self.bus, command);
        self.selector.select_none(&mut self.bus);
    }

    /// Pixel plane
    pub fn plane(&self) -> &P {
        &self.plane
    }

    /// Pixel plane, for drawing
    pub fn plane_mut(&mut self) -> &mut P {
        &mut self.plane
    }

    /// Last selection left on the chain
    pub fn selection(&self) -> Option<Selection> {
        self.selector.selection()
    }

    /// Release the bus and the plane
    pub fn release(self) -> (B, P) {
        (self.bus, self.plane)
    }
}

impl<B, P: PixelPlane> OriginDimensions for Ht1632c<B, P> {
    fn size(&self) -> Size {
        let geometry = self.plane.geometry();
        Size::new(geometry.width() as u32, geometry.height() as u32)
    }
}

impl<B, P> DrawTarget for Ht1632c<B, P>
where
    P: PixelPlane + DrawTarget<Color = PixelValue>,
{
    type Color = PixelValue;
    type Error = P::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.plane.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.plane, color)
    }
}
