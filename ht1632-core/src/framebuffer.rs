//! Packed 2-bit-per-pixel frame buffer
//!
//! Pixels are stored four to a byte, row by row, with the leftmost pixel
//! in the most significant bit pair. The buffer is sized for the largest
//! supported panel so it can live in a `static` without allocation.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::Pixel;

use crate::color::PixelValue;
use crate::config::ConfigError;
use crate::geometry::{Geometry, CHIP_PIXELS, MAX_CHIPS};

/// Bytes needed for the largest supported panel
pub const FRAME_BYTES: usize = CHIP_PIXELS * MAX_CHIPS / 4;

/// Pixel storage read by the driver
///
/// Coordinates outside the plane read as [`PixelValue::Black`] and are
/// ignored on write.
pub trait PixelPlane {
    /// Plane geometry
    fn geometry(&self) -> Geometry;

    /// Read one pixel
    fn get(&self, x: u16, y: u16) -> PixelValue;

    /// Write one pixel
    fn set(&mut self, x: u16, y: u16, value: PixelValue);

    /// Set every pixel to `value`
    fn fill(&mut self, value: PixelValue);
}

/// Frame buffer for one panel
#[derive(Clone)]
pub struct FrameBuffer {
    geometry: Geometry,
    buffer: [u8; FRAME_BYTES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            geometry: Geometry::PANEL_32X16,
            buffer: [0; FRAME_BYTES],
        }
    }
}

impl FrameBuffer {
    /// Create an all-black buffer for `geometry`
    pub fn new(geometry: Geometry) -> Result<Self, ConfigError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            buffer: [0; FRAME_BYTES],
        })
    }

    /// Raw packed bytes in use
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.used_bytes()]
    }

    fn used_bytes(&self) -> usize {
        self.geometry.width() as usize * self.geometry.height() as usize / 4
    }

    /// Byte index and shift of a pixel
    fn locate(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.geometry.width() || y >= self.geometry.height() {
            return None;
        }
        let index = y as usize * self.geometry.width() as usize + x as usize;
        let shift = (3 - (index & 3) as u8) * 2;
        Some((index >> 2, shift))
    }
}

impl PixelPlane for FrameBuffer {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn get(&self, x: u16, y: u16) -> PixelValue {
        match self.locate(x, y) {
            Some((byte, shift)) => PixelValue::from_bits(self.buffer[byte] >> shift),
            None => PixelValue::Black,
        }
    }

    fn set(&mut self, x: u16, y: u16, value: PixelValue) {
        if let Some((byte, shift)) = self.locate(x, y) {
            let cell = &mut self.buffer[byte];
            *cell = (*cell & !(0b11 << shift)) | (value.bits() << shift);
        }
    }

    fn fill(&mut self, value: PixelValue) {
        let bits = value.bits();
        let pattern = bits << 6 | bits << 4 | bits << 2 | bits;
        let used = self.used_bytes();
        self.buffer[..used].fill(pattern);
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(
            self.geometry.width() as u32,
            self.geometry.height() as u32,
        )
    }
}

impl DrawTarget for FrameBuffer {
    type Color = PixelValue;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x > u16::MAX as i32 || point.y > u16::MAX as i32
            {
                continue;
            }
            PixelPlane::set(self, point.x as u16, point.y as u16, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
