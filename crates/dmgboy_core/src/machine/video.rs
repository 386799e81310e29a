//! Tile data decoding for whoever renders the frame.
//!
//! Tiles are 8x8 pixels at 2 bits per pixel, 16 bytes each. Each row is a
//! low bit-plane byte followed by a high bit-plane byte, with bit 7 holding
//! the leftmost pixel.

use super::bus::VRAM_SIZE;

pub const TILE_BYTES: usize = 16;

/// One 8-pixel row of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileRow {
    pub lo: u8,
    pub hi: u8,
}

impl TileRow {
    /// Colour index (0..=3) of pixel `x`, where 0 is the leftmost.
    #[inline]
    pub fn pixel(self, x: u8) -> u8 {
        debug_assert!(x < 8);
        let bit = 7 - (x & 7);
        (((self.hi >> bit) & 1) << 1) | ((self.lo >> bit) & 1)
    }

    pub fn pixels(self) -> [u8; 8] {
        std::array::from_fn(|x| self.pixel(x as u8))
    }
}

/// Row `row` (0..=7) of tile `tile_index` in the 0x8000-based tile table.
pub fn tile_row(vram: &[u8; VRAM_SIZE], tile_index: u8, row: u8) -> TileRow {
    let offset = tile_index as usize * TILE_BYTES + (row as usize & 7) * 2;
    TileRow {
        lo: vram[offset],
        hi: vram[offset + 1],
    }
}
