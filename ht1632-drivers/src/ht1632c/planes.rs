//! Red/green bit-plane extraction
//!
//! A chip's RAM is filled column by column: for each of the 16 columns,
//! left to right, the 8 rows top to bottom. The same walk must be used
//! here, so bit `k` of a plane is pixel `(k / 8, k % 8)` of the block.

use ht1632_core::{ChipPosition, PixelPlane, CHIP_HEIGHT, CHIP_PIXELS, CHIP_WIDTH};

/// One color channel of a chip block, in transmission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitPlane(u128);

impl BitPlane {
    /// Bits per plane
    pub const LEN: usize = CHIP_PIXELS;

    /// All-off plane
    pub const fn new() -> Self {
        BitPlane(0)
    }

    /// Bit `index` (0 = sent first)
    pub fn get(&self, index: usize) -> bool {
        index < Self::LEN && (self.0 >> index) & 1 == 1
    }

    /// Set bit `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, on: bool) {
        if index >= Self::LEN {
            return;
        }
        if on {
            self.0 |= 1 << index;
        } else {
            self.0 &= !(1 << index);
        }
    }

    /// Check if every bit is off
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of lit pixels
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Bits in transmission order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..Self::LEN).map(move |index| self.get(index))
    }
}

/// Split one chip's block of `plane` into red and green planes
pub fn extract_planes<P>(plane: &P, position: ChipPosition) -> (BitPlane, BitPlane)
where
    P: PixelPlane + ?Sized,
{
    let (x0, y0) = position.origin();
    let mut red = BitPlane::new();
    let mut green = BitPlane::new();

    let mut index = 0;
    for col in 0..CHIP_WIDTH {
        for row in 0..CHIP_HEIGHT {
            let value = plane.get(x0 + col, y0 + row);
            red.set(index, value.red());
            green.set(index, value.green());
            index += 1;
        }
    }

    (red, green)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ht1632_core::{FrameBuffer, Geometry, PixelValue};

    fn position(chip: usize) -> ChipPosition {
        Geometry::PANEL_32X16.chip_position(chip).unwrap()
    }

    #[test]
    fn test_bit_plane_set_get() {
        let mut plane = BitPlane::new();
        plane.set(0, true);
        plane.set(127, true);
        plane.set(128, true);

        assert!(plane.get(0));
        assert!(plane.get(127));
        assert!(!plane.get(128));
        assert_eq!(plane.count_ones(), 2);

        plane.set(0, false);
        assert!(!plane.get(0));
        assert_eq!(plane.iter().filter(|&b| b).count(), 1);
    }

    #[test]
    fn test_black_block_is_empty() {
        let fb = FrameBuffer::default();
        let (red, green) = extract_planes(&fb, position(0));
        assert!(red.is_empty());
        assert!(green.is_empty());
    }

    #[test]
    fn test_column_major_order() {
        let mut fb = FrameBuffer::default();
        fb.set(0, 1, PixelValue::Red);
        fb.set(1, 0, PixelValue::Red);
        fb.set(15, 7, PixelValue::Red);

        let (red, green) = extract_planes(&fb, position(0));
        assert!(red.get(1));
        assert!(red.get(8));
        assert!(red.get(127));
        assert_eq!(red.count_ones(), 3);
        assert!(green.is_empty());
    }

    #[test]
    fn test_color_bits_split() {
        let mut fb = FrameBuffer::default();
        fb.set(0, 0, PixelValue::Red);
        fb.set(0, 1, PixelValue::Green);
        fb.set(0, 2, PixelValue::Orange);

        let (red, green) = extract_planes(&fb, position(0));
        assert_eq!((red.get(0), green.get(0)), (true, false));
        assert_eq!((red.get(1), green.get(1)), (false, true));
        assert_eq!((red.get(2), green.get(2)), (true, true));
    }

    #[test]
    fn test_blocks_are_offset_per_chip() {
        let mut fb = FrameBuffer::default();
        fb.set(16, 8, PixelValue::Green);

        for chip in 0..3 {
            let (red, green) = extract_planes(&fb, position(chip));
            assert!(red.is_empty() && green.is_empty());
        }

        let (red, green) = extract_planes(&fb, position(3));
        assert!(red.is_empty());
        assert!(green.get(0));
        assert_eq!(green.count_ones(), 1);
    }
}
